use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{EntityStatus, NoticeType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoticeDto {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 50))]
    pub writer: String,
    #[validate(length(min = 1))]
    pub text: String,
    /// Defaults to `ADMIN`.
    #[schema(value_type = Option<String>)]
    pub notice_type: Option<NoticeType>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoticeDto {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub text: Option<String>,
    #[schema(value_type = Option<String>)]
    pub notice_type: Option<NoticeType>,
    #[schema(value_type = Option<String>)]
    pub status: Option<EntityStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoticeSummaryDto {
    pub id: i32,
    pub title: String,
    pub writer: String,
    #[schema(value_type = String)]
    pub notice_type: NoticeType,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoticeDto {
    pub id: i32,
    pub title: String,
    pub writer: String,
    pub text: String,
    #[schema(value_type = String)]
    pub notice_type: NoticeType,
    #[schema(value_type = String)]
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
