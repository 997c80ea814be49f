use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{EntityStatus, Race};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{contest::ContestRefDto, player::PlayerRefDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchDto {
    pub player_one_id: i32,
    pub player_two_id: i32,
    /// Defaults to player one's registered race.
    #[schema(value_type = Option<String>)]
    pub player_one_race: Option<Race>,
    /// Defaults to player two's registered race.
    #[schema(value_type = Option<String>)]
    pub player_two_race: Option<Race>,
    pub winner_id: Option<i32>,
    #[validate(length(max = 100))]
    pub map_name: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(url)]
    pub streaming_url: Option<String>,
    pub match_time: Option<DateTime<Utc>>,
    pub contest_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMatchDto {
    pub player_one_id: Option<i32>,
    pub player_two_id: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub player_one_race: Option<Race>,
    #[schema(value_type = Option<String>)]
    pub player_two_race: Option<Race>,
    pub winner_id: Option<i32>,
    #[validate(length(max = 100))]
    pub map_name: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(url)]
    pub streaming_url: Option<String>,
    pub match_time: Option<DateTime<Utc>>,
    pub contest_id: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub status: Option<EntityStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummaryDto {
    pub id: i32,
    pub player_one: PlayerRefDto,
    pub player_two: PlayerRefDto,
    #[schema(value_type = Option<String>)]
    pub player_one_race: Option<Race>,
    #[schema(value_type = Option<String>)]
    pub player_two_race: Option<Race>,
    pub winner_id: Option<i32>,
    pub map_name: Option<String>,
    pub match_time: Option<DateTime<Utc>>,
    #[schema(value_type = String)]
    pub status: EntityStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub id: i32,
    pub player_one: PlayerRefDto,
    pub player_two: PlayerRefDto,
    #[schema(value_type = Option<String>)]
    pub player_one_race: Option<Race>,
    #[schema(value_type = Option<String>)]
    pub player_two_race: Option<Race>,
    pub winner: Option<PlayerRefDto>,
    pub loser: Option<PlayerRefDto>,
    pub map_name: Option<String>,
    pub description: Option<String>,
    pub streaming_url: Option<String>,
    pub contest: Option<ContestRefDto>,
    pub match_time: Option<DateTime<Utc>>,
    #[schema(value_type = String)]
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
