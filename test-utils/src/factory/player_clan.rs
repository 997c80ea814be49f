//! Clan membership factory.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::EntityStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clan memberships.
///
/// Defaults to a `Registered` membership joined now with no exit time.
pub struct PlayerClanFactory<'a> {
    db: &'a DatabaseConnection,
    player_id: i32,
    clan_id: i32,
    status: EntityStatus,
    joined_at: DateTime<Utc>,
    exited_at: Option<DateTime<Utc>>,
}

impl<'a> PlayerClanFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, player_id: i32, clan_id: i32) -> Self {
        Self {
            db,
            player_id,
            clan_id,
            status: EntityStatus::Registered,
            joined_at: Utc::now(),
            exited_at: None,
        }
    }

    pub fn status(mut self, status: EntityStatus) -> Self {
        self.status = status;
        self
    }

    pub fn joined_at(mut self, joined_at: DateTime<Utc>) -> Self {
        self.joined_at = joined_at;
        self
    }

    pub fn exited_at(mut self, exited_at: Option<DateTime<Utc>>) -> Self {
        self.exited_at = exited_at;
        self
    }

    pub async fn build(self) -> Result<entity::player_clan::Model, DbErr> {
        let now = Utc::now();

        entity::player_clan::ActiveModel {
            id: ActiveValue::NotSet,
            player_id: ActiveValue::Set(self.player_id),
            clan_id: ActiveValue::Set(self.clan_id),
            status: ActiveValue::Set(self.status),
            joined_at: ActiveValue::Set(self.joined_at),
            exited_at: ActiveValue::Set(self.exited_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open membership of `player_id` in `clan_id`.
pub async fn create_player_clan(
    db: &DatabaseConnection,
    player_id: i32,
    clan_id: i32,
) -> Result<entity::player_clan::Model, DbErr> {
    PlayerClanFactory::new(db, player_id, clan_id).build().await
}
