//! Clan factory for creating test clan entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::EntityStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clans with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let clan = ClanFactory::new(&db)
///     .name("SuClan")
///     .founding_date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
///     .build()
///     .await?;
/// ```
pub struct ClanFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    founding_date: NaiveDate,
    closing_date: Option<NaiveDate>,
    status: EntityStatus,
}

impl<'a> ClanFactory<'a> {
    /// Creates a new ClanFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Clan {id}"` where id is auto-incremented
    /// - founding_date: today
    /// - closing_date: `None`
    /// - status: `Registered`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Clan {}", id),
            description: Some("Test clan".to_string()),
            founding_date: Utc::now().date_naive(),
            closing_date: None,
            status: EntityStatus::Registered,
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

    pub fn founding_date(mut self, founding_date: NaiveDate) -> Self {
        self.founding_date = founding_date;
        self
    }

    pub fn closing_date(mut self, closing_date: Option<NaiveDate>) -> Self {
        self.closing_date = closing_date;
        self
    }

    pub fn status(mut self, status: EntityStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the clan entity into the database.
    pub async fn build(self) -> Result<entity::clan::Model, DbErr> {
        let now = Utc::now();
        let deleted_at = (self.status == EntityStatus::Deleted).then_some(now);

        entity::clan::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            founding_date: ActiveValue::Set(self.founding_date),
            closing_date: ActiveValue::Set(self.closing_date),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(deleted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a registered clan founded today.
pub async fn create_clan(db: &DatabaseConnection) -> Result<entity::clan::Model, DbErr> {
    ClanFactory::new(db).build().await
}
