use sea_orm::{DatabaseConnection, DbErr};
use std::collections::HashMap;

use crate::server::{
    data::{
        clan::ClanRepository, game_match::GameMatchRepository, grade::GradeRepository,
        player::PlayerRepository, player_clan::PlayerClanRepository,
    },
    error::AppError,
    model::{
        clan::{ClanHistoryEntry, ClanMembership},
        game_match::Match,
        grade::Grade,
        page::{Page, PageRequest, SortDirection},
        player::{
            CreatePlayerParams, OpponentStats, Player, PlayerListFilter, PlayerMatchFilter,
            PlayerProfile, PlayerSort, UpdatePlayerParams,
        },
    },
    service::game_match::assemble_matches,
};

const DEFAULT_SORT: [(PlayerSort, SortDirection); 1] = [(PlayerSort::Id, SortDirection::Desc)];

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new player, optionally placing them in a clan
    ///
    /// # Returns
    /// - `Ok(PlayerProfile)` - The created player with grade, clan and empty stats
    /// - `Err(AppError::BadRequest)` - Nickname already taken
    /// - `Err(AppError::NotFound)` - Unknown grade or clan
    pub async fn create(&self, params: CreatePlayerParams) -> Result<PlayerProfile, AppError> {
        let repo = PlayerRepository::new(self.db);

        self.ensure_nickname_available(&params.nickname, None).await?;
        if let Some(grade_id) = params.grade_id {
            self.ensure_grade_exists(grade_id).await?;
        }
        let clan = match &params.clan_name {
            Some(name) => Some(self.find_clan(name).await?),
            None => None,
        };

        let player = repo
            .create(&params, clan.map(|c| c.id))
            .await
            .map_err(|e| nickname_taken(e, &params.nickname))?;
        tracing::info!(player_id = player.id, nickname = %player.nickname, "Created player");

        self.get_by_id(player.id).await
    }

    /// Gets a player with grade, current clan and match stats
    pub async fn get_by_id(&self, id: i32) -> Result<PlayerProfile, AppError> {
        let repo = PlayerRepository::new(self.db);

        let player = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Player", id))?;

        build_profiles(self.db, vec![player])
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError(format!("Profile of player {} was not built", id)))
    }

    /// Gets a page of player profiles
    pub async fn get_paginated(
        &self,
        filter: &PlayerListFilter,
        request: &PageRequest,
    ) -> Result<Page<PlayerProfile>, AppError> {
        let repo = PlayerRepository::new(self.db);
        let sort = request.resolve_sort(&DEFAULT_SORT)?;

        let (players, total) = repo
            .get_paginated(filter, &sort, request.page, request.size)
            .await?;

        let profiles = build_profiles(self.db, players).await?;

        Ok(Page::new(profiles, total, request))
    }

    /// Updates a player
    ///
    /// A `clan_name` different from the current clan moves the player into that clan.
    pub async fn update(&self, params: UpdatePlayerParams) -> Result<PlayerProfile, AppError> {
        let repo = PlayerRepository::new(self.db);
        let id = params.id;

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Player", id));
        }
        if let Some(nickname) = &params.nickname {
            self.ensure_nickname_available(nickname, Some(id)).await?;
        }
        if let Some(grade_id) = params.grade_id {
            self.ensure_grade_exists(grade_id).await?;
        }
        let clan = match &params.clan_name {
            Some(name) => Some(self.find_clan(name).await?),
            None => None,
        };

        repo.update(&params)
            .await
            .map_err(|e| match &params.nickname {
                Some(nickname) => nickname_taken(e, nickname),
                None => e.into(),
            })?
            .ok_or_else(|| AppError::not_found("Player", id))?;

        if let Some(clan) = clan {
            let memberships = PlayerClanRepository::new(self.db);
            let current = memberships.current_for_players(&[id]).await?;
            let current_clan_id = current.get(&id).map(|(membership, _)| membership.clan_id);

            if current_clan_id != Some(clan.id) {
                memberships.switch_clan(id, clan.id).await?;
                tracing::info!(player_id = id, clan_id = clan.id, "Moved player to clan");
            }
        }
        tracing::info!(player_id = id, "Updated player");

        self.get_by_id(id).await
    }

    /// Soft deletes a player
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = PlayerRepository::new(self.db);

        repo.soft_delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Player", id))?;
        tracing::info!(player_id = id, "Deleted player");

        Ok(())
    }

    /// Gets a page of the player's matches, latest first
    pub async fn matches(
        &self,
        id: i32,
        filter: &PlayerMatchFilter,
        request: &PageRequest,
    ) -> Result<Page<Match>, AppError> {
        self.ensure_player_exists(id).await?;

        let (matches, total) = GameMatchRepository::new(self.db)
            .for_player(id, filter, request.page, request.size)
            .await?;

        let matches = assemble_matches(self.db, matches).await?;

        Ok(Page::new(matches, total, request))
    }

    /// Gets a page of head-to-head results against each opponent
    pub async fn opponents(
        &self,
        id: i32,
        opponent_nickname: Option<&str>,
        request: &PageRequest,
    ) -> Result<Page<OpponentStats>, AppError> {
        self.ensure_player_exists(id).await?;

        let (rows, total) = GameMatchRepository::new(self.db)
            .opponent_stats(id, opponent_nickname, request.page, request.size)
            .await?;

        let ids: Vec<i32> = rows.iter().map(|row| row.opponent_id).collect();
        let mut opponents = PlayerRepository::new(self.db).get_many(&ids).await?;

        let stats = rows
            .into_iter()
            .map(|row| {
                let opponent = opponents.remove(&row.opponent_id).ok_or_else(|| {
                    AppError::InternalError(format!("Opponent {} is missing", row.opponent_id))
                })?;

                Ok(OpponentStats {
                    opponent: Player::from_entity(opponent),
                    total_count: row.total_count as u64,
                    wins: row.wins as u64,
                    losses: row.losses as u64,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(Page::new(stats, total, request))
    }

    /// Gets every clan membership of the player, newest first
    pub async fn clan_history(&self, id: i32) -> Result<Vec<ClanHistoryEntry>, AppError> {
        self.ensure_player_exists(id).await?;

        let history = PlayerClanRepository::new(self.db).history(id).await?;

        Ok(history
            .into_iter()
            .map(|(membership, clan)| ClanHistoryEntry::from_entity(membership, clan))
            .collect())
    }

    async fn ensure_player_exists(&self, id: i32) -> Result<(), AppError> {
        match PlayerRepository::new(self.db).get_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found("Player", id)),
        }
    }

    async fn ensure_nickname_available(
        &self,
        nickname: &str,
        own_id: Option<i32>,
    ) -> Result<(), AppError> {
        let repo = PlayerRepository::new(self.db);

        match repo.find_by_nickname(nickname).await? {
            Some(existing) if Some(existing.id) != own_id => {
                tracing::warn!(nickname = %nickname, "Rejected duplicate nickname");
                Err(AppError::BadRequest(format!(
                    "Nickname already exists: {}",
                    nickname
                )))
            }
            _ => Ok(()),
        }
    }

    async fn ensure_grade_exists(&self, grade_id: i32) -> Result<(), AppError> {
        match GradeRepository::new(self.db).get_by_id(grade_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found("Grade", grade_id)),
        }
    }

    async fn find_clan(&self, name: &str) -> Result<entity::clan::Model, AppError> {
        ClanRepository::new(self.db)
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Clan not found with name: {}", name)))
    }
}

fn nickname_taken(err: DbErr, nickname: &str) -> AppError {
    AppError::unique_violation(err, || format!("Nickname already exists: {}", nickname))
}

/// Builds profiles for players, preserving their order
///
/// Loads grades, current clans and match stats in one query each.
pub async fn build_profiles(
    db: &DatabaseConnection,
    players: Vec<entity::player::Model>,
) -> Result<Vec<PlayerProfile>, AppError> {
    let ids: Vec<i32> = players.iter().map(|p| p.id).collect();
    let grade_ids: Vec<i32> = players.iter().filter_map(|p| p.grade_id).collect();

    let grades: HashMap<i32, Grade> = GradeRepository::new(db)
        .get_many(&grade_ids)
        .await?
        .into_iter()
        .map(|(id, grade)| (id, Grade::from_entity(grade)))
        .collect();
    let mut clans = PlayerClanRepository::new(db).current_for_players(&ids).await?;
    let stats = PlayerRepository::new(db).stats(&ids).await?;

    Ok(players
        .into_iter()
        .map(|player| {
            let grade = player.grade_id.and_then(|id| grades.get(&id).cloned());
            let clan = clans
                .remove(&player.id)
                .map(|(membership, clan)| ClanMembership::from_entity(membership, clan));
            let stats = stats.get(&player.id).copied().unwrap_or_default();

            PlayerProfile {
                player: Player::from_entity(player),
                grade,
                clan,
                stats,
            }
        })
        .collect())
}
