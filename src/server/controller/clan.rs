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
        clan::{ClanDto, ClanSummaryDto, CreateClanDto, UpdateClanDto},
        player::PlayerSummaryDto,
    },
    server::{
        controller::{page_request, ListQuery},
        error::AppError,
        model::{
            clan::{CreateClanParams, UpdateClanParams},
            player::PlayerProfile,
        },
        service::clan::ClanService,
        state::AppState,
    },
};

/// Tag for grouping clan endpoints in OpenAPI documentation
pub static CLAN_TAG: &str = "clan";

/// Create a new clan.
///
/// The founding date defaults to today when omitted.
///
/// # Returns
/// - `201 Created` - The created clan
/// - `400 Bad Request` - Invalid payload or name already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clans",
    tag = CLAN_TAG,
    request_body = CreateClanDto,
    responses(
        (status = 201, description = "Successfully created clan", body = ClanDto),
        (status = 400, description = "Invalid clan data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_clan(
    State(state): State<AppState>,
    Json(payload): Json<CreateClanDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = ClanService::new(&state.db);
    let clan = service.create(CreateClanParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(clan.into_dto(0))))
}

/// List clans with their member counts.
///
/// Sortable by `name`, `foundingDate`, `createdAt` and `id` (default `id,desc`).
#[utoipa::path(
    get,
    path = "/api/clans",
    tag = CLAN_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "Successfully retrieved clans", body = PageDto<ClanSummaryDto>),
        (status = 400, description = "Invalid page or sort parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clans(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let request = page_request(&state, query.page, query.size, query.sort.as_deref())?;

    let service = ClanService::new(&state.db);
    let page = service
        .get_paginated(query.include_deleted, &request)
        .await?;

    Ok(Json(
        page.into_dto(|(clan, member_count)| clan.into_summary_dto(member_count)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/clans/{id}",
    tag = CLAN_TAG,
    params(("id" = i32, Path, description = "Clan ID")),
    responses(
        (status = 200, description = "Successfully retrieved clan", body = ClanDto),
        (status = 404, description = "Clan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClanService::new(&state.db);
    let (clan, member_count) = service.get_by_id(id).await?;

    Ok(Json(clan.into_dto(member_count)))
}

/// Update a clan.
///
/// Only the provided fields change.
#[utoipa::path(
    put,
    path = "/api/clans/{id}",
    tag = CLAN_TAG,
    params(("id" = i32, Path, description = "Clan ID")),
    request_body = UpdateClanDto,
    responses(
        (status = 200, description = "Successfully updated clan", body = ClanDto),
        (status = 400, description = "Invalid clan data", body = ErrorDto),
        (status = 404, description = "Clan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_clan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateClanDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = ClanService::new(&state.db);
    let (clan, member_count) = service
        .update(UpdateClanParams::from_dto(id, payload))
        .await?;

    Ok(Json(clan.into_dto(member_count)))
}

#[utoipa::path(
    delete,
    path = "/api/clans/{id}",
    tag = CLAN_TAG,
    params(("id" = i32, Path, description = "Clan ID")),
    responses(
        (status = 204, description = "Successfully deleted clan"),
        (status = 404, description = "Clan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_clan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClanService::new(&state.db);
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the current members of a clan, ordered by nickname.
#[utoipa::path(
    get,
    path = "/api/clans/{id}/members",
    tag = CLAN_TAG,
    params(("id" = i32, Path, description = "Clan ID")),
    responses(
        (status = 200, description = "Successfully retrieved members", body = Vec<PlayerSummaryDto>),
        (status = 404, description = "Clan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clan_members(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClanService::new(&state.db);
    let members = service.members(id).await?;

    Ok(Json(
        members
            .into_iter()
            .map(PlayerProfile::into_summary_dto)
            .collect::<Vec<_>>(),
    ))
}
