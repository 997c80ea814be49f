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
        clan::ClanHistoryEntryDto,
        game_match::MatchSummaryDto,
        player::{CreatePlayerDto, OpponentStatsDto, PlayerDto, PlayerSummaryDto, UpdatePlayerDto},
    },
    server::{
        controller::page_request,
        error::AppError,
        model::{
            clan::ClanHistoryEntry,
            game_match::Match,
            player::{
                CreatePlayerParams, OpponentStats, PlayerListFilter, PlayerMatchFilter,
                PlayerProfile, UpdatePlayerParams,
            },
        },
        service::player::PlayerService,
        state::AppState,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PlayerListQuery {
    /// Zero-based page index (default: 0)
    pub page: Option<u64>,
    /// Page size (default: configured page size, max 100)
    pub size: Option<u64>,
    /// Sort instructions, e.g. `nickname,asc`
    pub sort: Option<String>,
    /// Include soft-deleted players (default: false)
    #[serde(default)]
    pub include_deleted: bool,
    /// Case-insensitive nickname substring
    pub nickname: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PlayerMatchQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
    /// Nickname substring of the other participant
    pub opponent_nickname: Option<String>,
    /// Map name substring
    pub map_name: Option<String>,
    /// Inclusive lower bound on the match time
    pub started_at: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the match time
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub include_deleted: bool,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OpponentQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
    /// Opponent nickname substring
    pub opponent_nickname: Option<String>,
}

/// Register a new player.
///
/// The player joins `clanName` on creation when given.
///
/// # Returns
/// - `201 Created` - The created player
/// - `400 Bad Request` - Invalid payload or nickname already taken
/// - `404 Not Found` - Unknown grade or clan
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/players",
    tag = PLAYER_TAG,
    request_body = CreatePlayerDto,
    responses(
        (status = 201, description = "Successfully created player", body = PlayerDto),
        (status = 400, description = "Invalid player data", body = ErrorDto),
        (status = 404, description = "Grade or clan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = PlayerService::new(&state.db);
    let player = service.create(CreatePlayerParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(player.into_dto())))
}

/// List players with their grade, current clan and record.
///
/// Sortable by `nickname`, `race`, `createdAt`, `id`, `wins`, `losses` and `totalMatches`
/// (default `id,desc`).
#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    params(PlayerListQuery),
    responses(
        (status = 200, description = "Successfully retrieved players", body = PageDto<PlayerSummaryDto>),
        (status = 400, description = "Invalid page or sort parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players(
    State(state): State<AppState>,
    Query(query): Query<PlayerListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let request = page_request(&state, query.page, query.size, query.sort.as_deref())?;
    let filter = PlayerListFilter {
        include_deleted: query.include_deleted,
        nickname: query.nickname,
    };

    let service = PlayerService::new(&state.db);
    let page = service.get_paginated(&filter, &request).await?;

    Ok(Json(page.into_dto(PlayerProfile::into_summary_dto)))
}

#[utoipa::path(
    get,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    responses(
        (status = 200, description = "Successfully retrieved player", body = PlayerDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PlayerService::new(&state.db);
    let player = service.get_by_id(id).await?;

    Ok(Json(player.into_dto()))
}

/// Update a player.
///
/// A `clanName` different from the current clan expires the current membership and
/// registers a new one.
#[utoipa::path(
    put,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    request_body = UpdatePlayerDto,
    responses(
        (status = 200, description = "Successfully updated player", body = PlayerDto),
        (status = 400, description = "Invalid player data", body = ErrorDto),
        (status = 404, description = "Player, grade or clan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = PlayerService::new(&state.db);
    let player = service
        .update(UpdatePlayerParams::from_dto(id, payload))
        .await?;

    Ok(Json(player.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    responses(
        (status = 204, description = "Successfully deleted player"),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PlayerService::new(&state.db);
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the matches a player took part in, latest first.
#[utoipa::path(
    get,
    path = "/api/players/{id}/matches",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID"), PlayerMatchQuery),
    responses(
        (status = 200, description = "Successfully retrieved matches", body = PageDto<MatchSummaryDto>),
        (status = 400, description = "Page index out of range", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player_matches(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<PlayerMatchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let request = page_request(&state, query.page, query.size, None)?;
    let filter = PlayerMatchFilter {
        opponent_nickname: query.opponent_nickname,
        map_name: query.map_name,
        started_at: query.started_at,
        ended_at: query.ended_at,
        include_deleted: query.include_deleted,
    };

    let service = PlayerService::new(&state.db);
    let page = service.matches(id, &filter, &request).await?;

    Ok(Json(page.into_dto(Match::into_summary_dto)))
}

/// Head-to-head record of a player against each opponent.
///
/// Ordered by the number of matches played against the opponent, most first.
#[utoipa::path(
    get,
    path = "/api/players/{id}/opponents",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID"), OpponentQuery),
    responses(
        (status = 200, description = "Successfully retrieved opponents", body = PageDto<OpponentStatsDto>),
        (status = 400, description = "Page index out of range", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player_opponents(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<OpponentQuery>,
) -> Result<impl IntoResponse, AppError> {
    let request = page_request(&state, query.page, query.size, None)?;

    let service = PlayerService::new(&state.db);
    let page = service
        .opponents(id, query.opponent_nickname.as_deref(), &request)
        .await?;

    Ok(Json(page.into_dto(OpponentStats::into_dto)))
}

/// List every clan the player has belonged to, newest membership first.
#[utoipa::path(
    get,
    path = "/api/players/{id}/clans",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    responses(
        (status = 200, description = "Successfully retrieved clan history", body = Vec<ClanHistoryEntryDto>),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player_clans(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PlayerService::new(&state.db);
    let history = service.clan_history(id).await?;

    Ok(Json(
        history
            .into_iter()
            .map(ClanHistoryEntry::into_dto)
            .collect::<Vec<_>>(),
    ))
}
