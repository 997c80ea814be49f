//! Notice factory for creating test notice entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{EntityStatus, NoticeType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notices with customizable fields.
pub struct NoticeFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    text: String,
    writer: String,
    notice_type: NoticeType,
    status: EntityStatus,
    created_at: DateTime<Utc>,
}

impl<'a> NoticeFactory<'a> {
    /// Creates a new NoticeFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Notice {id}"` where id is auto-incremented
    /// - writer: `"admin"`
    /// - notice_type: `Admin`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Notice {}", id),
            text: "Test notice body".to_string(),
            writer: "admin".to_string(),
            notice_type: NoticeType::Admin,
            status: EntityStatus::Registered,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn writer(mut self, writer: impl Into<String>) -> Self {
        self.writer = writer.into();
        self
    }

    pub fn notice_type(mut self, notice_type: NoticeType) -> Self {
        self.notice_type = notice_type;
        self
    }

    pub fn status(mut self, status: EntityStatus) -> Self {
        self.status = status;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::notice::Model, DbErr> {
        let deleted_at = (self.status == EntityStatus::Deleted).then(Utc::now);

        entity::notice::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            text: ActiveValue::Set(self.text),
            writer: ActiveValue::Set(self.writer),
            notice_type: ActiveValue::Set(self.notice_type),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            deleted_at: ActiveValue::Set(deleted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a registered admin notice.
pub async fn create_notice(db: &DatabaseConnection) -> Result<entity::notice::Model, DbErr> {
    NoticeFactory::new(db).build().await
}
