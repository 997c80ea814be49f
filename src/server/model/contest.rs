//! Contest domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::EntityStatus;

use crate::{
    model::contest::{
        ContestDto, ContestRefDto, ContestSummaryDto, CreateContestDto, UpdateContestDto,
    },
    server::model::{game_match::Match, page::SortField, player::Player},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContestSort {
    Name,
    StartedAt,
    CreatedAt,
    Id,
}

impl SortField for ContestSort {
    fn parse(property: &str) -> Option<Self> {
        match property {
            "name" => Some(Self::Name),
            "startedAt" => Some(Self::StartedAt),
            "createdAt" => Some(Self::CreatedAt),
            "id" => Some(Self::Id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contest {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub status: EntityStatus,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contest {
    pub fn from_entity(entity: entity::contest::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            status: entity.status,
            started_at: entity.started_at,
            ended_at: entity.ended_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_summary_dto(self, participant_count: u64) -> ContestSummaryDto {
        ContestSummaryDto {
            id: self.id,
            name: self.name,
            status: self.status,
            started_at: self.started_at,
            ended_at: self.ended_at,
            participant_count,
        }
    }
}

/// Contest name reference embedded in match responses.
#[derive(Debug, Clone, PartialEq)]
pub struct ContestRef {
    pub id: i32,
    pub name: String,
}

impl ContestRef {
    pub fn from_entity(entity: entity::contest::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> ContestRefDto {
        ContestRefDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Contest with its participants and non-deleted matches.
#[derive(Debug, Clone)]
pub struct ContestDetail {
    pub contest: Contest,
    pub participants: Vec<Player>,
    pub matches: Vec<Match>,
}

impl ContestDetail {
    pub fn into_dto(self) -> ContestDto {
        ContestDto {
            id: self.contest.id,
            name: self.contest.name,
            description: self.contest.description,
            status: self.contest.status,
            started_at: self.contest.started_at,
            ended_at: self.contest.ended_at,
            participant_count: self.participants.len() as u64,
            match_count: self.matches.len() as u64,
            participants: self
                .participants
                .into_iter()
                .map(Player::into_ref_dto)
                .collect(),
            matches: self
                .matches
                .into_iter()
                .map(Match::into_summary_dto)
                .collect(),
            created_at: self.contest.created_at,
            updated_at: self.contest.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateContestParams {
    pub name: String,
    pub description: Option<String>,
    pub started_at: DateTime<Utc>,
}

impl CreateContestParams {
    /// Converts the request, defaulting the start time to now.
    pub fn from_dto(dto: CreateContestDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            started_at: dto.started_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateContestParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub ended_at: Option<DateTime<Utc>>,
    pub status: Option<EntityStatus>,
}

impl UpdateContestParams {
    pub fn from_dto(id: i32, dto: UpdateContestDto) -> Self {
        Self {
            id,
            name: dto.name.map(|name| name.trim().to_string()),
            description: dto.description,
            ended_at: dto.ended_at,
            status: dto.status,
        }
    }
}
