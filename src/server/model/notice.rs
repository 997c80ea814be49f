//! Notice domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{EntityStatus, NoticeType};

use crate::model::notice::{CreateNoticeDto, NoticeDto, NoticeSummaryDto, UpdateNoticeDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub writer: String,
    pub notice_type: NoticeType,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Notice {
    pub fn from_entity(entity: entity::notice::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            text: entity.text,
            writer: entity.writer,
            notice_type: entity.notice_type,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_summary_dto(self) -> NoticeSummaryDto {
        NoticeSummaryDto {
            id: self.id,
            title: self.title,
            writer: self.writer,
            notice_type: self.notice_type,
            created_at: self.created_at,
        }
    }

    pub fn into_dto(self) -> NoticeDto {
        NoticeDto {
            id: self.id,
            title: self.title,
            writer: self.writer,
            text: self.text,
            notice_type: self.notice_type,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNoticeParams {
    pub title: String,
    pub writer: String,
    pub text: String,
    pub notice_type: NoticeType,
}

impl CreateNoticeParams {
    pub fn from_dto(dto: CreateNoticeDto) -> Self {
        Self {
            title: dto.title,
            writer: dto.writer,
            text: dto.text,
            notice_type: dto.notice_type.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateNoticeParams {
    pub id: i32,
    pub title: Option<String>,
    pub text: Option<String>,
    pub notice_type: Option<NoticeType>,
    pub status: Option<EntityStatus>,
}

impl UpdateNoticeParams {
    pub fn from_dto(id: i32, dto: UpdateNoticeDto) -> Self {
        Self {
            id,
            title: dto.title,
            text: dto.text,
            notice_type: dto.notice_type,
            status: dto.status,
        }
    }
}
