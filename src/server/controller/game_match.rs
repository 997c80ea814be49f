use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        game_match::{CreateMatchDto, MatchDto, MatchSummaryDto, UpdateMatchDto},
    },
    server::{
        controller::page_request,
        error::AppError,
        model::game_match::{CreateMatchParams, Match, MatchSearchFilter, UpdateMatchParams},
        service::game_match::GameMatchService,
        state::AppState,
    },
};

/// Tag for grouping match endpoints in OpenAPI documentation
pub static MATCH_TAG: &str = "match";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MatchSearchQuery {
    /// Zero-based page index (default: 0)
    pub page: Option<u64>,
    /// Page size (default: configured page size, max 100)
    pub size: Option<u64>,
    /// Sort instructions, e.g. `matchTime,desc;mapName,asc`
    pub sort: Option<String>,
    /// Nickname substring matched against either participant
    pub player_one_nickname: Option<String>,
    /// Nickname substring matched against either participant
    pub player_two_nickname: Option<String>,
    /// Map name substring
    pub map_name: Option<String>,
    /// Inclusive lower bound on the match time
    pub started_at: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the match time
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub include_deleted: bool,
}

/// Record a match.
///
/// The loser is derived from the winner. Races default to the players' registered races.
///
/// # Returns
/// - `201 Created` - The recorded match
/// - `400 Bad Request` - Same player on both sides or winner not a participant
/// - `404 Not Found` - Unknown player or contest
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/matches",
    tag = MATCH_TAG,
    request_body = CreateMatchDto,
    responses(
        (status = 201, description = "Successfully created match", body = MatchDto),
        (status = 400, description = "Invalid match data", body = ErrorDto),
        (status = 404, description = "Player or contest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_match(
    State(state): State<AppState>,
    Json(payload): Json<CreateMatchDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = GameMatchService::new(&state.db);
    let game_match = service.create(CreateMatchParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(game_match.into_dto())))
}

/// Search matches.
///
/// Sortable by `playerOneNickname`, `playerTwoNickname`, `matchTime`, `mapName`, `createdAt`
/// and `id` (default `matchTime,desc`).
#[utoipa::path(
    get,
    path = "/api/matches",
    tag = MATCH_TAG,
    params(MatchSearchQuery),
    responses(
        (status = 200, description = "Successfully retrieved matches", body = PageDto<MatchSummaryDto>),
        (status = 400, description = "Invalid page or sort parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_matches(
    State(state): State<AppState>,
    Query(query): Query<MatchSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let request = page_request(&state, query.page, query.size, query.sort.as_deref())?;
    let filter = MatchSearchFilter {
        player_one_nickname: query.player_one_nickname,
        player_two_nickname: query.player_two_nickname,
        map_name: query.map_name,
        started_at: query.started_at,
        ended_at: query.ended_at,
        include_deleted: query.include_deleted,
    };

    let service = GameMatchService::new(&state.db);
    let page = service.search(&filter, &request).await?;

    Ok(Json(page.into_dto(Match::into_summary_dto)))
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Successfully retrieved match", body = MatchDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameMatchService::new(&state.db);
    let game_match = service.get_by_id(id).await?;

    Ok(Json(game_match.into_dto()))
}

/// Update a match.
///
/// Changing a participant or the winner re-derives the loser.
#[utoipa::path(
    put,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = UpdateMatchDto,
    responses(
        (status = 200, description = "Successfully updated match", body = MatchDto),
        (status = 400, description = "Invalid match data", body = ErrorDto),
        (status = 404, description = "Match, player or contest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_match(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMatchDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = GameMatchService::new(&state.db);
    let game_match = service
        .update(UpdateMatchParams::from_dto(id, payload))
        .await?;

    Ok(Json(game_match.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 204, description = "Successfully deleted match"),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameMatchService::new(&state.db);
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
