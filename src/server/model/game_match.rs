//! Match domain models, parameters and result rules.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{EntityStatus, Race};
use std::collections::HashMap;

use crate::{
    model::game_match::{CreateMatchDto, MatchDto, MatchSummaryDto, UpdateMatchDto},
    server::{
        error::AppError,
        model::{contest::ContestRef, page::SortField, player::Player},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSort {
    PlayerOneNickname,
    PlayerTwoNickname,
    MatchTime,
    MapName,
    CreatedAt,
    Id,
}

impl SortField for MatchSort {
    fn parse(property: &str) -> Option<Self> {
        match property {
            "playerOneNickname" => Some(Self::PlayerOneNickname),
            "playerTwoNickname" => Some(Self::PlayerTwoNickname),
            "matchTime" => Some(Self::MatchTime),
            "mapName" => Some(Self::MapName),
            "createdAt" => Some(Self::CreatedAt),
            "id" => Some(Self::Id),
            _ => None,
        }
    }
}

/// Filters for the match search.
///
/// Both nickname filters match either participant; when both are given a match must
/// satisfy both.
#[derive(Debug, Clone, Default)]
pub struct MatchSearchFilter {
    pub player_one_nickname: Option<String>,
    pub player_two_nickname: Option<String>,
    pub map_name: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub include_deleted: bool,
}

/// Validates the participants and derives the loser.
///
/// # Returns
/// - `Ok(None)` - No winner recorded
/// - `Ok(Some(loser_id))` - The participant who is not the winner
/// - `Err(AppError::BadRequest)` - Same player on both sides, or winner not a participant
pub fn resolve_result(
    player_one_id: i32,
    player_two_id: i32,
    winner_id: Option<i32>,
) -> Result<Option<i32>, AppError> {
    if player_one_id == player_two_id {
        return Err(AppError::BadRequest(
            "A match requires two different players".to_string(),
        ));
    }

    match winner_id {
        None => Ok(None),
        Some(winner) if winner == player_one_id => Ok(Some(player_two_id)),
        Some(winner) if winner == player_two_id => Ok(Some(player_one_id)),
        Some(winner) => Err(AppError::BadRequest(format!(
            "Winner {} is not a participant of the match",
            winner
        ))),
    }
}

/// A match with its participants and contest resolved.
#[derive(Debug, Clone)]
pub struct Match {
    pub id: i32,
    pub player_one: Player,
    pub player_two: Player,
    pub player_one_race: Option<Race>,
    pub player_two_race: Option<Race>,
    pub winner_id: Option<i32>,
    pub loser_id: Option<i32>,
    pub map_name: Option<String>,
    pub description: Option<String>,
    pub streaming_url: Option<String>,
    pub contest: Option<ContestRef>,
    pub match_time: Option<DateTime<Utc>>,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Match {
    /// Converts an entity using preloaded participants and contests.
    ///
    /// # Arguments
    /// - `entity` - Match row
    /// - `players` - Players keyed by id, must contain both participants
    /// - `contests` - Contests keyed by id
    ///
    /// # Returns
    /// - `Ok(Match)` - Converted match
    /// - `Err(AppError::InternalError)` - A participant row is missing
    pub fn from_entity(
        entity: entity::game_match::Model,
        players: &HashMap<i32, Player>,
        contests: &HashMap<i32, ContestRef>,
    ) -> Result<Self, AppError> {
        let participant = |id: i32| {
            players.get(&id).cloned().ok_or_else(|| {
                AppError::InternalError(format!(
                    "Player {} referenced by match {} is missing",
                    id, entity.id
                ))
            })
        };

        Ok(Self {
            id: entity.id,
            player_one: participant(entity.player_one_id)?,
            player_two: participant(entity.player_two_id)?,
            player_one_race: entity.player_one_race,
            player_two_race: entity.player_two_race,
            winner_id: entity.winner_id,
            loser_id: entity.loser_id,
            map_name: entity.map_name,
            description: entity.description,
            streaming_url: entity.streaming_url,
            contest: entity
                .contest_id
                .and_then(|contest_id| contests.get(&contest_id).cloned()),
            match_time: entity.match_time,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    fn participant(&self, id: Option<i32>) -> Option<Player> {
        match id {
            Some(id) if id == self.player_one.id => Some(self.player_one.clone()),
            Some(id) if id == self.player_two.id => Some(self.player_two.clone()),
            _ => None,
        }
    }

    pub fn into_summary_dto(self) -> MatchSummaryDto {
        MatchSummaryDto {
            id: self.id,
            player_one: self.player_one.into_ref_dto(),
            player_two: self.player_two.into_ref_dto(),
            player_one_race: self.player_one_race,
            player_two_race: self.player_two_race,
            winner_id: self.winner_id,
            map_name: self.map_name,
            match_time: self.match_time,
            status: self.status,
        }
    }

    pub fn into_dto(self) -> MatchDto {
        let winner = self.participant(self.winner_id).map(Player::into_ref_dto);
        let loser = self.participant(self.loser_id).map(Player::into_ref_dto);

        MatchDto {
            id: self.id,
            player_one: self.player_one.into_ref_dto(),
            player_two: self.player_two.into_ref_dto(),
            player_one_race: self.player_one_race,
            player_two_race: self.player_two_race,
            winner,
            loser,
            map_name: self.map_name,
            description: self.description,
            streaming_url: self.streaming_url,
            contest: self.contest.map(ContestRef::into_dto),
            match_time: self.match_time,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMatchParams {
    pub player_one_id: i32,
    pub player_two_id: i32,
    pub player_one_race: Option<Race>,
    pub player_two_race: Option<Race>,
    pub winner_id: Option<i32>,
    pub map_name: Option<String>,
    pub description: Option<String>,
    pub streaming_url: Option<String>,
    pub match_time: Option<DateTime<Utc>>,
    pub contest_id: Option<i32>,
}

impl CreateMatchParams {
    pub fn from_dto(dto: CreateMatchDto) -> Self {
        Self {
            player_one_id: dto.player_one_id,
            player_two_id: dto.player_two_id,
            player_one_race: dto.player_one_race,
            player_two_race: dto.player_two_race,
            winner_id: dto.winner_id,
            map_name: dto.map_name,
            description: dto.description,
            streaming_url: dto.streaming_url,
            match_time: dto.match_time,
            contest_id: dto.contest_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMatchParams {
    pub id: i32,
    pub player_one_id: Option<i32>,
    pub player_two_id: Option<i32>,
    pub player_one_race: Option<Race>,
    pub player_two_race: Option<Race>,
    pub winner_id: Option<i32>,
    pub map_name: Option<String>,
    pub description: Option<String>,
    pub streaming_url: Option<String>,
    pub match_time: Option<DateTime<Utc>>,
    pub contest_id: Option<i32>,
    pub status: Option<EntityStatus>,
}

impl UpdateMatchParams {
    pub fn from_dto(id: i32, dto: UpdateMatchDto) -> Self {
        Self {
            id,
            player_one_id: dto.player_one_id,
            player_two_id: dto.player_two_id,
            player_one_race: dto.player_one_race,
            player_two_race: dto.player_two_race,
            winner_id: dto.winner_id,
            map_name: dto.map_name,
            description: dto.description,
            streaming_url: dto.streaming_url,
            match_time: dto.match_time,
            contest_id: dto.contest_id,
            status: dto.status,
        }
    }
}
