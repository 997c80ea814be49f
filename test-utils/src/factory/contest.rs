//! Contest factory for creating test contest entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::EntityStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test contests with customizable fields.
pub struct ContestFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    status: EntityStatus,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl<'a> ContestFactory<'a> {
    /// Creates a new ContestFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Contest {id}"` where id is auto-incremented
    /// - started_at: now
    /// - ended_at: `None`
    /// - status: `Registered`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Contest {}", id),
            description: None,
            status: EntityStatus::Registered,
            started_at: Utc::now(),
            ended_at: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn status(mut self, status: EntityStatus) -> Self {
        self.status = status;
        self
    }

    pub fn started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = started_at;
        self
    }

    pub fn ended_at(mut self, ended_at: Option<DateTime<Utc>>) -> Self {
        self.ended_at = ended_at;
        self
    }

    pub async fn build(self) -> Result<entity::contest::Model, DbErr> {
        let now = Utc::now();
        let deleted_at = (self.status == EntityStatus::Deleted).then_some(now);

        entity::contest::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            started_at: ActiveValue::Set(self.started_at),
            ended_at: ActiveValue::Set(self.ended_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(deleted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a registered contest starting now.
pub async fn create_contest(db: &DatabaseConnection) -> Result<entity::contest::Model, DbErr> {
    ContestFactory::new(db).build().await
}
