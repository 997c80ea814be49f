use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::NoticeType;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, IdDto, PageDto},
        notice::{CreateNoticeDto, NoticeDto, NoticeSummaryDto, UpdateNoticeDto},
    },
    server::{
        controller::page_request,
        error::AppError,
        model::notice::{CreateNoticeParams, Notice, UpdateNoticeParams},
        service::notice::NoticeService,
        state::AppState,
    },
};

/// Tag for grouping notice endpoints in OpenAPI documentation
pub static NOTICE_TAG: &str = "notice";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct NoticeQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
    /// `SYSTEM` or `ADMIN`
    #[param(value_type = Option<String>)]
    pub notice_type: Option<NoticeType>,
}

/// List live notices, newest first.
#[utoipa::path(
    get,
    path = "/api/notice",
    tag = NOTICE_TAG,
    params(NoticeQuery),
    responses(
        (status = 200, description = "Successfully retrieved notices", body = PageDto<NoticeSummaryDto>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notices(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let request = page_request(&state, query.page, query.size, None)?;

    let service = NoticeService::new(&state.db);
    let page = service.get_paginated(query.notice_type, &request).await?;

    Ok(Json(page.into_dto(Notice::into_summary_dto)))
}

/// Post a notice.
///
/// # Returns
/// - `201 Created` - Id of the created notice
/// - `400 Bad Request` - Invalid payload
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/notice",
    tag = NOTICE_TAG,
    request_body = CreateNoticeDto,
    responses(
        (status = 201, description = "Successfully created notice", body = IdDto),
        (status = 400, description = "Invalid notice data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_notice(
    State(state): State<AppState>,
    Json(payload): Json<CreateNoticeDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = NoticeService::new(&state.db);
    let notice = service.create(CreateNoticeParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(IdDto { id: notice.id })))
}

#[utoipa::path(
    get,
    path = "/api/notice/{id}",
    tag = NOTICE_TAG,
    params(("id" = i32, Path, description = "Notice ID")),
    responses(
        (status = 200, description = "Successfully retrieved notice", body = NoticeDto),
        (status = 404, description = "Notice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = NoticeService::new(&state.db);
    let notice = service.get_by_id(id).await?;

    Ok(Json(notice.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/notice/{id}",
    tag = NOTICE_TAG,
    params(("id" = i32, Path, description = "Notice ID")),
    request_body = UpdateNoticeDto,
    responses(
        (status = 200, description = "Successfully updated notice", body = NoticeDto),
        (status = 400, description = "Invalid notice data", body = ErrorDto),
        (status = 404, description = "Notice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_notice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateNoticeDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = NoticeService::new(&state.db);
    let notice = service
        .update(UpdateNoticeParams::from_dto(id, payload))
        .await?;

    Ok(Json(notice.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/notice/{id}",
    tag = NOTICE_TAG,
    params(("id" = i32, Path, description = "Notice ID")),
    responses(
        (status = 204, description = "Successfully deleted notice"),
        (status = 404, description = "Notice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = NoticeService::new(&state.db);
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
