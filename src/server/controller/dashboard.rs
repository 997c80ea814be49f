use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, dashboard::DashboardDto},
    server::{error::AppError, service::dashboard::DashboardService, state::AppState},
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Landing page data.
///
/// Counts of registered clans, players and matches plus the most recent matches.
#[utoipa::path(
    get,
    path = "/api/main",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Successfully retrieved dashboard", body = DashboardDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = DashboardService::new(&state.db);
    let dashboard = service.get().await?;

    Ok(Json(dashboard.into_dto()))
}
