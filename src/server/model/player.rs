//! Player domain models and parameters.
//!
//! A player's profile combines the player row with its grade, its current clan membership and
//! match statistics computed from non-deleted matches.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{EntityStatus, Race};

use crate::{
    model::player::{
        CreatePlayerDto, OpponentStatsDto, PlayerDto, PlayerRefDto, PlayerSummaryDto,
        UpdatePlayerDto,
    },
    server::model::{clan::ClanMembership, grade::Grade, page::SortField},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSort {
    Nickname,
    CreatedAt,
    Id,
    Wins,
    Losses,
    TotalMatches,
}

impl SortField for PlayerSort {
    fn parse(property: &str) -> Option<Self> {
        match property {
            "nickname" => Some(Self::Nickname),
            "createdAt" => Some(Self::CreatedAt),
            "id" => Some(Self::Id),
            "wins" => Some(Self::Wins),
            "losses" => Some(Self::Losses),
            "totalMatches" => Some(Self::TotalMatches),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    pub nickname: String,
    pub race: Option<Race>,
    pub grade_id: Option<i32>,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Player {
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            nickname: entity.nickname,
            race: entity.race,
            grade_id: entity.grade_id,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_ref_dto(self) -> PlayerRefDto {
        PlayerRefDto {
            id: self.id,
            nickname: self.nickname,
            race: self.race,
        }
    }
}

/// Match record of a player. Soft-deleted matches are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub wins: u64,
    pub losses: u64,
    pub total_matches: u64,
}

#[derive(Debug, Clone)]
pub struct PlayerProfile {
    pub player: Player,
    pub grade: Option<Grade>,
    pub clan: Option<ClanMembership>,
    pub stats: PlayerStats,
}

impl PlayerProfile {
    pub fn into_summary_dto(self) -> PlayerSummaryDto {
        PlayerSummaryDto {
            id: self.player.id,
            nickname: self.player.nickname,
            race: self.player.race,
            grade: self.grade.map(Grade::into_summary_dto),
            clan: self.clan.map(ClanMembership::into_dto),
            wins: self.stats.wins,
            losses: self.stats.losses,
            total_matches: self.stats.total_matches,
            status: self.player.status,
            created_at: self.player.created_at,
        }
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.player.id,
            nickname: self.player.nickname,
            race: self.player.race,
            grade: self.grade.map(Grade::into_summary_dto),
            clan: self.clan.map(ClanMembership::into_dto),
            wins: self.stats.wins,
            losses: self.stats.losses,
            total_matches: self.stats.total_matches,
            status: self.player.status,
            created_at: self.player.created_at,
            updated_at: self.player.updated_at,
        }
    }
}

/// Filters for the player listing.
#[derive(Debug, Clone, Default)]
pub struct PlayerListFilter {
    /// `false` lists registered players only, `true` adds soft-deleted ones.
    pub include_deleted: bool,
    /// Case-insensitive substring of the nickname.
    pub nickname: Option<String>,
}

/// Filters for a single player's match history.
#[derive(Debug, Clone, Default)]
pub struct PlayerMatchFilter {
    pub opponent_nickname: Option<String>,
    pub map_name: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub include_deleted: bool,
}

/// Head-to-head record against one opponent.
#[derive(Debug, Clone)]
pub struct OpponentStats {
    pub opponent: Player,
    pub total_count: u64,
    pub wins: u64,
    pub losses: u64,
}

impl OpponentStats {
    pub fn into_dto(self) -> OpponentStatsDto {
        OpponentStatsDto {
            opponent: self.opponent.into_ref_dto(),
            total_count: self.total_count,
            wins: self.wins,
            losses: self.losses,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePlayerParams {
    pub nickname: String,
    pub race: Option<Race>,
    pub grade_id: Option<i32>,
    pub clan_name: Option<String>,
}

impl CreatePlayerParams {
    pub fn from_dto(dto: CreatePlayerDto) -> Self {
        Self {
            nickname: dto.nickname.trim().to_string(),
            race: dto.race,
            grade_id: dto.grade_id,
            clan_name: dto.clan_name.map(|name| name.trim().to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePlayerParams {
    pub id: i32,
    pub nickname: Option<String>,
    pub race: Option<Race>,
    pub grade_id: Option<i32>,
    pub status: Option<EntityStatus>,
    pub clan_name: Option<String>,
}

impl UpdatePlayerParams {
    pub fn from_dto(id: i32, dto: UpdatePlayerDto) -> Self {
        Self {
            id,
            nickname: dto.nickname.map(|nickname| nickname.trim().to_string()),
            race: dto.race,
            grade_id: dto.grade_id,
            status: dto.status,
            clan_name: dto.clan_name.map(|name| name.trim().to_string()),
        }
    }
}
