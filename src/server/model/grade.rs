//! Grade domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::EntityStatus;

use crate::{
    model::grade::{CreateGradeDto, GradeDto, GradeSummaryDto, UpdateGradeDto},
    server::model::page::SortField,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeSort {
    Name,
    CreatedAt,
    Id,
}

impl SortField for GradeSort {
    fn parse(property: &str) -> Option<Self> {
        match property {
            "name" => Some(Self::Name),
            "createdAt" => Some(Self::CreatedAt),
            "id" => Some(Self::Id),
            _ => None,
        }
    }
}

/// Ranking tier assignable to players.
#[derive(Debug, Clone, PartialEq)]
pub struct Grade {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Grade {
    pub fn from_entity(entity: entity::grade::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_summary_dto(self) -> GradeSummaryDto {
        GradeSummaryDto {
            id: self.id,
            name: self.name,
            status: self.status,
        }
    }
}

/// Grade with the number of non-deleted players holding it.
#[derive(Debug, Clone)]
pub struct GradeDetail {
    pub grade: Grade,
    pub player_count: u64,
}

impl GradeDetail {
    pub fn into_dto(self) -> GradeDto {
        GradeDto {
            id: self.grade.id,
            name: self.grade.name,
            description: self.grade.description,
            status: self.grade.status,
            player_count: self.player_count,
            created_at: self.grade.created_at,
            updated_at: self.grade.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGradeParams {
    pub name: String,
    pub description: Option<String>,
}

impl CreateGradeParams {
    pub fn from_dto(dto: CreateGradeDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateGradeParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<EntityStatus>,
}

impl UpdateGradeParams {
    pub fn from_dto(id: i32, dto: UpdateGradeDto) -> Self {
        Self {
            id,
            name: dto.name.map(|name| name.trim().to_string()),
            description: dto.description,
            status: dto.status,
        }
    }
}
