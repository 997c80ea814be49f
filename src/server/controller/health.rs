use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, HealthDto},
    server::{error::AppError, state::AppState},
};

pub static HEALTH_TAG: &str = "health";

/// Liveness check that pings the database.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service and database are reachable", body = HealthDto),
        (status = 500, description = "Database unreachable", body = ErrorDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.db.ping().await?;

    Ok(Json(HealthDto {
        status: "ok".to_string(),
    }))
}
