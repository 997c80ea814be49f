use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        contest::{AddParticipantDto, ContestDto, ContestSummaryDto, CreateContestDto, UpdateContestDto},
    },
    server::{
        controller::{page_request, ListQuery},
        error::AppError,
        model::contest::{CreateContestParams, UpdateContestParams},
        service::contest::ContestService,
        state::AppState,
    },
};

/// Tag for grouping contest endpoints in OpenAPI documentation
pub static CONTEST_TAG: &str = "contest";

/// Create a new contest.
///
/// `startedAt` defaults to the creation time.
#[utoipa::path(
    post,
    path = "/api/contests",
    tag = CONTEST_TAG,
    request_body = CreateContestDto,
    responses(
        (status = 201, description = "Successfully created contest", body = ContestDto),
        (status = 400, description = "Invalid contest data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_contest(
    State(state): State<AppState>,
    Json(payload): Json<CreateContestDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = ContestService::new(&state.db);
    let contest = service
        .create(CreateContestParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(contest.into_dto())))
}

/// List contests with their participant counts.
///
/// Sortable by `name`, `startedAt`, `createdAt` and `id` (default `id,desc`).
#[utoipa::path(
    get,
    path = "/api/contests",
    tag = CONTEST_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "Successfully retrieved contests", body = PageDto<ContestSummaryDto>),
        (status = 400, description = "Invalid page or sort parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contests(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let request = page_request(&state, query.page, query.size, query.sort.as_deref())?;

    let service = ContestService::new(&state.db);
    let page = service
        .get_paginated(query.include_deleted, &request)
        .await?;

    Ok(Json(page.into_dto(|(contest, participant_count)| {
        contest.into_summary_dto(participant_count)
    })))
}

/// Get a contest with its participants and matches.
#[utoipa::path(
    get,
    path = "/api/contests/{id}",
    tag = CONTEST_TAG,
    params(("id" = i32, Path, description = "Contest ID")),
    responses(
        (status = 200, description = "Successfully retrieved contest", body = ContestDto),
        (status = 404, description = "Contest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contest(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ContestService::new(&state.db);
    let contest = service.get_by_id(id).await?;

    Ok(Json(contest.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/contests/{id}",
    tag = CONTEST_TAG,
    params(("id" = i32, Path, description = "Contest ID")),
    request_body = UpdateContestDto,
    responses(
        (status = 200, description = "Successfully updated contest", body = ContestDto),
        (status = 400, description = "Invalid contest data", body = ErrorDto),
        (status = 404, description = "Contest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_contest(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateContestDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = ContestService::new(&state.db);
    let contest = service
        .update(UpdateContestParams::from_dto(id, payload))
        .await?;

    Ok(Json(contest.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/contests/{id}",
    tag = CONTEST_TAG,
    params(("id" = i32, Path, description = "Contest ID")),
    responses(
        (status = 204, description = "Successfully deleted contest"),
        (status = 404, description = "Contest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_contest(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ContestService::new(&state.db);
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Register a player to a contest.
///
/// Registering an existing participant again is a no-op.
///
/// # Returns
/// - `200 OK` - The contest with its updated participants
/// - `404 Not Found` - Unknown contest or player
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/contests/{id}/participants",
    tag = CONTEST_TAG,
    params(("id" = i32, Path, description = "Contest ID")),
    request_body = AddParticipantDto,
    responses(
        (status = 200, description = "Successfully registered participant", body = ContestDto),
        (status = 404, description = "Contest or player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_participant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AddParticipantDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ContestService::new(&state.db);
    let contest = service.add_participant(id, payload.player_id).await?;

    Ok(Json(contest.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/contests/{id}/participants/{player_id}",
    tag = CONTEST_TAG,
    params(
        ("id" = i32, Path, description = "Contest ID"),
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 204, description = "Successfully removed participant"),
        (status = 404, description = "Player is not a participant", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_participant(
    State(state): State<AppState>,
    Path((id, player_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = ContestService::new(&state.db);
    service.remove_participant(id, player_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
