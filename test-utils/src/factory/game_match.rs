//! Match factory for creating test match entities.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{EntityStatus, Race};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test matches between two existing players.
///
/// Setting a winner through `winner()` derives the loser from the other participant.
///
/// # Example
///
/// ```rust,ignore
/// let game_match = MatchFactory::new(&db, flash.id, jaedong.id)
///     .winner(flash.id)
///     .map_name(Some("Fighting Spirit".to_string()))
///     .build()
///     .await?;
/// ```
pub struct MatchFactory<'a> {
    db: &'a DatabaseConnection,
    player_one_id: i32,
    player_two_id: i32,
    player_one_race: Option<Race>,
    player_two_race: Option<Race>,
    winner_id: Option<i32>,
    map_name: Option<String>,
    description: Option<String>,
    streaming_url: Option<String>,
    contest_id: Option<i32>,
    match_time: Option<DateTime<Utc>>,
    status: EntityStatus,
}

impl<'a> MatchFactory<'a> {
    /// Creates a new MatchFactory with default values.
    ///
    /// Defaults:
    /// - races: `None`
    /// - winner: `None`
    /// - map_name: `Some("Fighting Spirit")`
    /// - match_time: now
    /// - status: `Registered`
    pub fn new(db: &'a DatabaseConnection, player_one_id: i32, player_two_id: i32) -> Self {
        Self {
            db,
            player_one_id,
            player_two_id,
            player_one_race: None,
            player_two_race: None,
            winner_id: None,
            map_name: Some("Fighting Spirit".to_string()),
            description: None,
            streaming_url: None,
            contest_id: None,
            match_time: Some(Utc::now()),
            status: EntityStatus::Registered,
        }
    }

    pub fn races(mut self, player_one: Option<Race>, player_two: Option<Race>) -> Self {
        self.player_one_race = player_one;
        self.player_two_race = player_two;
        self
    }

    pub fn winner(mut self, winner_id: i32) -> Self {
        self.winner_id = Some(winner_id);
        self
    }

    pub fn map_name(mut self, map_name: Option<String>) -> Self {
        self.map_name = map_name;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn streaming_url(mut self, streaming_url: Option<String>) -> Self {
        self.streaming_url = streaming_url;
        self
    }

    pub fn contest_id(mut self, contest_id: Option<i32>) -> Self {
        self.contest_id = contest_id;
        self
    }

    pub fn match_time(mut self, match_time: Option<DateTime<Utc>>) -> Self {
        self.match_time = match_time;
        self
    }

    pub fn status(mut self, status: EntityStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::game_match::Model, DbErr> {
        let now = Utc::now();
        let loser_id = self.winner_id.map(|winner| {
            if winner == self.player_one_id {
                self.player_two_id
            } else {
                self.player_one_id
            }
        });
        let deleted_at = (self.status == EntityStatus::Deleted).then_some(now);

        entity::game_match::ActiveModel {
            id: ActiveValue::NotSet,
            player_one_id: ActiveValue::Set(self.player_one_id),
            player_two_id: ActiveValue::Set(self.player_two_id),
            player_one_race: ActiveValue::Set(self.player_one_race),
            player_two_race: ActiveValue::Set(self.player_two_race),
            winner_id: ActiveValue::Set(self.winner_id),
            loser_id: ActiveValue::Set(loser_id),
            map_name: ActiveValue::Set(self.map_name),
            description: ActiveValue::Set(self.description),
            streaming_url: ActiveValue::Set(self.streaming_url),
            contest_id: ActiveValue::Set(self.contest_id),
            match_time: ActiveValue::Set(self.match_time),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(deleted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an undecided match between two players.
pub async fn create_match(
    db: &DatabaseConnection,
    player_one_id: i32,
    player_two_id: i32,
) -> Result<entity::game_match::Model, DbErr> {
    MatchFactory::new(db, player_one_id, player_two_id)
        .build()
        .await
}
