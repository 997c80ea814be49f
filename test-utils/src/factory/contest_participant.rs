//! Contest participation factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Registers `player_id` as a participant of `contest_id`.
pub async fn create_contest_participant(
    db: &DatabaseConnection,
    contest_id: i32,
    player_id: i32,
) -> Result<entity::contest_participant::Model, DbErr> {
    entity::contest_participant::ActiveModel {
        contest_id: ActiveValue::Set(contest_id),
        player_id: ActiveValue::Set(player_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
