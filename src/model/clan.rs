use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::EntityStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClanDto {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    /// Defaults to today when omitted.
    pub founding_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClanDto {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    pub closing_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>)]
    pub status: Option<EntityStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClanSummaryDto {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String)]
    pub status: EntityStatus,
    pub founding_date: NaiveDate,
    pub member_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClanDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String)]
    pub status: EntityStatus,
    pub founding_date: NaiveDate,
    pub closing_date: Option<NaiveDate>,
    pub member_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A player's open membership, embedded in player responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClanMembershipDto {
    pub clan_id: i32,
    pub clan_name: String,
    pub joined_at: DateTime<Utc>,
}

/// One membership in a player's clan history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClanHistoryEntryDto {
    pub clan_id: i32,
    pub clan_name: String,
    /// `REGISTERED` for the current membership, `EXPIRED` for past ones.
    #[schema(value_type = String)]
    pub status: EntityStatus,
    pub joined_at: DateTime<Utc>,
    pub exited_at: Option<DateTime<Utc>>,
}
