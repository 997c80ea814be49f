use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{EntityStatus, Race};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{clan::ClanMembershipDto, grade::GradeSummaryDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerDto {
    #[validate(length(min = 1, max = 30))]
    pub nickname: String,
    #[schema(value_type = Option<String>)]
    pub race: Option<Race>,
    pub grade_id: Option<i32>,
    /// Name of an existing clan the player joins on creation.
    #[validate(length(min = 1, max = 50))]
    pub clan_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerDto {
    #[validate(length(min = 1, max = 30))]
    pub nickname: Option<String>,
    #[schema(value_type = Option<String>)]
    pub race: Option<Race>,
    pub grade_id: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub status: Option<EntityStatus>,
    /// Switches the player's current clan.
    #[validate(length(min = 1, max = 50))]
    pub clan_name: Option<String>,
}

/// Minimal player reference embedded in matches, contests and opponent stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRefDto {
    pub id: i32,
    pub nickname: String,
    #[schema(value_type = Option<String>)]
    pub race: Option<Race>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummaryDto {
    pub id: i32,
    pub nickname: String,
    #[schema(value_type = Option<String>)]
    pub race: Option<Race>,
    pub grade: Option<GradeSummaryDto>,
    pub clan: Option<ClanMembershipDto>,
    pub wins: u64,
    pub losses: u64,
    pub total_matches: u64,
    #[schema(value_type = String)]
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: i32,
    pub nickname: String,
    #[schema(value_type = Option<String>)]
    pub race: Option<Race>,
    pub grade: Option<GradeSummaryDto>,
    pub clan: Option<ClanMembershipDto>,
    pub wins: u64,
    pub losses: u64,
    pub total_matches: u64,
    #[schema(value_type = String)]
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Head-to-head record of a player against one opponent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpponentStatsDto {
    pub opponent: PlayerRefDto,
    pub total_count: u64,
    pub wins: u64,
    pub losses: u64,
}
