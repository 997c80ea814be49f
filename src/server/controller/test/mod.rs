use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::sea_orm_active_enums::{NoticeType, Race};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{controller::ListQuery, state::AppState};


fn state(db: &DatabaseConnection) -> AppState {
    AppState::new(db.clone(), 20)
}

/// Splits a handler response into its status and parsed JSON body.
async fn into_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}
