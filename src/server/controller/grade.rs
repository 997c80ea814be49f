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
        grade::{CreateGradeDto, GradeDto, GradeSummaryDto, UpdateGradeDto},
    },
    server::{
        controller::{page_request, ListQuery},
        error::AppError,
        model::grade::{CreateGradeParams, Grade, UpdateGradeParams},
        service::grade::GradeService,
        state::AppState,
    },
};

/// Tag for grouping grade endpoints in OpenAPI documentation
pub static GRADE_TAG: &str = "grade";

/// Create a new grade.
///
/// # Returns
/// - `201 Created` - The created grade
/// - `400 Bad Request` - Invalid payload or name already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/grades",
    tag = GRADE_TAG,
    request_body = CreateGradeDto,
    responses(
        (status = 201, description = "Successfully created grade", body = GradeDto),
        (status = 400, description = "Invalid grade data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_grade(
    State(state): State<AppState>,
    Json(payload): Json<CreateGradeDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = GradeService::new(&state.db);
    let grade = service.create(CreateGradeParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(grade.into_dto())))
}

/// List grades.
///
/// Soft-deleted grades are hidden unless `includeDeleted` is set. Sortable by `name`,
/// `createdAt` and `id` (default `id,desc`).
#[utoipa::path(
    get,
    path = "/api/grades",
    tag = GRADE_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "Successfully retrieved grades", body = PageDto<GradeSummaryDto>),
        (status = 400, description = "Invalid page or sort parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_grades(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let request = page_request(&state, query.page, query.size, query.sort.as_deref())?;

    let service = GradeService::new(&state.db);
    let page = service
        .get_paginated(query.include_deleted, &request)
        .await?;

    Ok(Json(page.into_dto(Grade::into_summary_dto)))
}

/// Get a grade with its player count.
#[utoipa::path(
    get,
    path = "/api/grades/{id}",
    tag = GRADE_TAG,
    params(("id" = i32, Path, description = "Grade ID")),
    responses(
        (status = 200, description = "Successfully retrieved grade", body = GradeDto),
        (status = 404, description = "Grade not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_grade(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GradeService::new(&state.db);
    let grade = service.get_by_id(id).await?;

    Ok(Json(grade.into_dto()))
}

/// Update a grade.
///
/// Only the provided fields change. Setting `status` to anything but `DELETED` restores a
/// deleted grade.
#[utoipa::path(
    put,
    path = "/api/grades/{id}",
    tag = GRADE_TAG,
    params(("id" = i32, Path, description = "Grade ID")),
    request_body = UpdateGradeDto,
    responses(
        (status = 200, description = "Successfully updated grade", body = GradeDto),
        (status = 400, description = "Invalid grade data", body = ErrorDto),
        (status = 404, description = "Grade not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_grade(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGradeDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = GradeService::new(&state.db);
    let grade = service
        .update(UpdateGradeParams::from_dto(id, payload))
        .await?;

    Ok(Json(grade.into_dto()))
}

/// Soft delete a grade.
#[utoipa::path(
    delete,
    path = "/api/grades/{id}",
    tag = GRADE_TAG,
    params(("id" = i32, Path, description = "Grade ID")),
    responses(
        (status = 204, description = "Successfully deleted grade"),
        (status = 404, description = "Grade not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_grade(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GradeService::new(&state.db);
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
