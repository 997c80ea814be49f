//! Clan domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::EntityStatus;

use crate::{
    model::clan::{
        ClanDto, ClanHistoryEntryDto, ClanMembershipDto, ClanSummaryDto, CreateClanDto,
        UpdateClanDto,
    },
    server::model::page::SortField,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClanSort {
    Name,
    FoundingDate,
    CreatedAt,
    Id,
}

impl SortField for ClanSort {
    fn parse(property: &str) -> Option<Self> {
        match property {
            "name" => Some(Self::Name),
            "foundingDate" => Some(Self::FoundingDate),
            "createdAt" => Some(Self::CreatedAt),
            "id" => Some(Self::Id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Clan {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub founding_date: NaiveDate,
    pub closing_date: Option<NaiveDate>,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Clan {
    pub fn from_entity(entity: entity::clan::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            founding_date: entity.founding_date,
            closing_date: entity.closing_date,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// # Arguments
    /// - `member_count` - Number of open memberships in the clan
    pub fn into_summary_dto(self, member_count: u64) -> ClanSummaryDto {
        ClanSummaryDto {
            id: self.id,
            name: self.name,
            status: self.status,
            founding_date: self.founding_date,
            member_count,
        }
    }

    pub fn into_dto(self, member_count: u64) -> ClanDto {
        ClanDto {
            id: self.id,
            name: self.name,
            description: self.description,
            status: self.status,
            founding_date: self.founding_date,
            closing_date: self.closing_date,
            member_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A player's open membership together with the clan's name.
#[derive(Debug, Clone, PartialEq)]
pub struct ClanMembership {
    pub clan_id: i32,
    pub clan_name: String,
    pub joined_at: DateTime<Utc>,
}

impl ClanMembership {
    pub fn from_entity(membership: entity::player_clan::Model, clan: entity::clan::Model) -> Self {
        Self {
            clan_id: membership.clan_id,
            clan_name: clan.name,
            joined_at: membership.joined_at,
        }
    }

    pub fn into_dto(self) -> ClanMembershipDto {
        ClanMembershipDto {
            clan_id: self.clan_id,
            clan_name: self.clan_name,
            joined_at: self.joined_at,
        }
    }
}

/// A past or current membership of a player.
#[derive(Debug, Clone)]
pub struct ClanHistoryEntry {
    pub clan_id: i32,
    pub clan_name: String,
    pub status: EntityStatus,
    pub joined_at: DateTime<Utc>,
    pub exited_at: Option<DateTime<Utc>>,
}

impl ClanHistoryEntry {
    pub fn from_entity(membership: entity::player_clan::Model, clan: entity::clan::Model) -> Self {
        Self {
            clan_id: membership.clan_id,
            clan_name: clan.name,
            status: membership.status,
            joined_at: membership.joined_at,
            exited_at: membership.exited_at,
        }
    }

    pub fn into_dto(self) -> ClanHistoryEntryDto {
        ClanHistoryEntryDto {
            clan_id: self.clan_id,
            clan_name: self.clan_name,
            status: self.status,
            joined_at: self.joined_at,
            exited_at: self.exited_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateClanParams {
    pub name: String,
    pub description: Option<String>,
    pub founding_date: NaiveDate,
}

impl CreateClanParams {
    /// Converts the request, defaulting the founding date to today (UTC).
    pub fn from_dto(dto: CreateClanDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            founding_date: dto
                .founding_date
                .unwrap_or_else(|| Utc::now().date_naive()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateClanParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub closing_date: Option<NaiveDate>,
    pub status: Option<EntityStatus>,
}

impl UpdateClanParams {
    pub fn from_dto(id: i32, dto: UpdateClanDto) -> Self {
        Self {
            id,
            name: dto.name.map(|name| name.trim().to_string()),
            description: dto.description,
            closing_date: dto.closing_date,
            status: dto.status,
        }
    }
}
