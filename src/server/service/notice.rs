use entity::sea_orm_active_enums::NoticeType;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::notice::NoticeRepository,
    error::AppError,
    model::{
        notice::{CreateNoticeParams, Notice, UpdateNoticeParams},
        page::{Page, PageRequest},
    },
};

pub struct NoticeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoticeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNoticeParams) -> Result<Notice, AppError> {
        let notice = NoticeRepository::new(self.db).create(params).await?;
        tracing::info!(notice_id = notice.id, writer = %notice.writer, "Created notice");

        Ok(Notice::from_entity(notice))
    }

    /// Gets a notice by id, including deleted ones
    pub async fn get_by_id(&self, id: i32) -> Result<Notice, AppError> {
        NoticeRepository::new(self.db)
            .get_by_id(id)
            .await?
            .map(Notice::from_entity)
            .ok_or_else(|| AppError::not_found("Notice", id))
    }

    /// Gets a page of live notices, newest first
    pub async fn get_paginated(
        &self,
        notice_type: Option<NoticeType>,
        request: &PageRequest,
    ) -> Result<Page<Notice>, AppError> {
        let (notices, total) = NoticeRepository::new(self.db)
            .get_paginated(notice_type, request.page, request.size)
            .await?;

        Ok(Page::new(
            notices.into_iter().map(Notice::from_entity).collect(),
            total,
            request,
        ))
    }

    pub async fn update(&self, params: UpdateNoticeParams) -> Result<Notice, AppError> {
        let id = params.id;

        let notice = NoticeRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::not_found("Notice", id))?;
        tracing::info!(notice_id = id, "Updated notice");

        Ok(Notice::from_entity(notice))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        NoticeRepository::new(self.db)
            .soft_delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Notice", id))?;
        tracing::info!(notice_id = id, "Deleted notice");

        Ok(())
    }
}
