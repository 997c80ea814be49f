//! Player factory for creating test player entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{EntityStatus, Race};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let player = PlayerFactory::new(&db)
///     .nickname("Flash")
///     .race(Some(Race::Terran))
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    nickname: String,
    race: Option<Race>,
    grade_id: Option<i32>,
    status: EntityStatus,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - nickname: `"player{id}"` where id is auto-incremented
    /// - race: `Some(Race::Protoss)`
    /// - grade_id: `None`
    /// - status: `Registered`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            nickname: format!("player{}", id),
            race: Some(Race::Protoss),
            grade_id: None,
            status: EntityStatus::Registered,
        }
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn race(mut self, race: Option<Race>) -> Self {
        self.race = race;
        self
    }

    pub fn grade_id(mut self, grade_id: Option<i32>) -> Self {
        self.grade_id = grade_id;
        self
    }

    pub fn status(mut self, status: EntityStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert (including duplicate nickname)
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        let now = Utc::now();
        let deleted_at = (self.status == EntityStatus::Deleted).then_some(now);

        entity::player::ActiveModel {
            id: ActiveValue::NotSet,
            nickname: ActiveValue::Set(self.nickname),
            race: ActiveValue::Set(self.race),
            grade_id: ActiveValue::Set(self.grade_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(deleted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a registered Protoss player with a unique nickname and no grade.
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}
