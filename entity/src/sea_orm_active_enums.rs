use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status shared by every table.
///
/// Soft deletion sets `Deleted`; listings treat `Registered` as the live state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "RUNNING")]
    Running,
    #[sea_orm(string_value = "REGISTERED")]
    Registered,
    #[sea_orm(string_value = "MERGED")]
    Merged,
    #[sea_orm(string_value = "BANNED")]
    Banned,
    #[sea_orm(string_value = "DELETED")]
    Deleted,
    #[sea_orm(string_value = "EXPIRED")]
    Expired,
}

/// Playable race of a player or of a player within a single match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Race {
    #[sea_orm(string_value = "PROTOSS")]
    Protoss,
    #[sea_orm(string_value = "TERRAN")]
    Terran,
    #[sea_orm(string_value = "ZERG")]
    Zerg,
    #[sea_orm(string_value = "RANDOM")]
    Random,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoticeType {
    #[sea_orm(string_value = "SYSTEM")]
    System,
    #[default]
    #[sea_orm(string_value = "ADMIN")]
    Admin,
}
