use chrono::Utc;
use entity::sea_orm_active_enums::{EntityStatus, NoticeType};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    notice::{CreateNoticeParams, UpdateNoticeParams},
    status::deleted_at_for,
};

pub struct NoticeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoticeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNoticeParams) -> Result<entity::notice::Model, DbErr> {
        let now = Utc::now();

        entity::notice::ActiveModel {
            title: ActiveValue::Set(params.title),
            text: ActiveValue::Set(params.text),
            writer: ActiveValue::Set(params.writer),
            notice_type: ActiveValue::Set(params.notice_type),
            status: ActiveValue::Set(EntityStatus::Registered),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::notice::Model>, DbErr> {
        entity::prelude::Notice::find_by_id(id).one(self.db).await
    }

    /// Gets a page of non-deleted notices, newest first
    pub async fn get_paginated(
        &self,
        notice_type: Option<NoticeType>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::notice::Model>, u64), DbErr> {
        let mut query = entity::prelude::Notice::find()
            .filter(entity::notice::Column::Status.ne(EntityStatus::Deleted));

        if let Some(notice_type) = notice_type {
            query = query.filter(entity::notice::Column::NoticeType.eq(notice_type));
        }

        let paginator = query
            .order_by_desc(entity::notice::Column::CreatedAt)
            .order_by_desc(entity::notice::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let notices = paginator.fetch_page(page).await?;

        Ok((notices, total))
    }

    /// Applies the provided fields to a notice
    ///
    /// Returns None if the notice doesn't exist
    pub async fn update(
        &self,
        params: UpdateNoticeParams,
    ) -> Result<Option<entity::notice::Model>, DbErr> {
        let Some(notice) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let deleted_at = notice.deleted_at;
        let mut active: entity::notice::ActiveModel = notice.into();

        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(text) = params.text {
            active.text = ActiveValue::Set(text);
        }
        if let Some(notice_type) = params.notice_type {
            active.notice_type = ActiveValue::Set(notice_type);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
            active.deleted_at = ActiveValue::Set(deleted_at_for(status, deleted_at, now));
        }
        active.updated_at = ActiveValue::Set(now);

        active.update(self.db).await.map(Some)
    }

    /// Soft deletes a notice
    ///
    /// Returns None if the notice doesn't exist
    pub async fn soft_delete(&self, id: i32) -> Result<Option<entity::notice::Model>, DbErr> {
        self.update(UpdateNoticeParams {
            id,
            title: None,
            text: None,
            notice_type: None,
            status: Some(EntityStatus::Deleted),
        })
        .await
    }
}
