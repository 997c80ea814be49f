use sea_orm::DatabaseConnection;
use std::collections::{BTreeSet, HashMap};

use crate::server::{
    data::{contest::ContestRepository, game_match::GameMatchRepository, player::PlayerRepository},
    error::AppError,
    model::{
        contest::ContestRef,
        game_match::{
            resolve_result, CreateMatchParams, Match, MatchSearchFilter, MatchSort,
            UpdateMatchParams,
        },
        page::{Page, PageRequest, SortDirection},
        player::Player,
    },
};

const DEFAULT_SORT: [(MatchSort, SortDirection); 1] =
    [(MatchSort::MatchTime, SortDirection::Desc)];

pub struct GameMatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameMatchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new match
    ///
    /// Missing races default to each player's registered race and the loser is derived
    /// from the winner.
    ///
    /// # Returns
    /// - `Ok(Match)` - The created match
    /// - `Err(AppError::BadRequest)` - Same player twice, or a winner outside the match
    /// - `Err(AppError::NotFound)` - Unknown player or contest
    pub async fn create(&self, mut params: CreateMatchParams) -> Result<Match, AppError> {
        let loser_id = resolve_result(params.player_one_id, params.player_two_id, params.winner_id)
            .inspect_err(|err| tracing::warn!(error = %err, "Rejected match result"))?;

        let player_one = self.find_player(params.player_one_id).await?;
        let player_two = self.find_player(params.player_two_id).await?;
        if let Some(contest_id) = params.contest_id {
            self.ensure_contest_exists(contest_id).await?;
        }

        params.player_one_race = params.player_one_race.or(player_one.race);
        params.player_two_race = params.player_two_race.or(player_two.race);

        let game_match = GameMatchRepository::new(self.db)
            .create(params, loser_id)
            .await?;
        tracing::info!(match_id = game_match.id, "Created match");

        self.get_by_id(game_match.id).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Match, AppError> {
        let game_match = GameMatchRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Match", id))?;

        assemble_matches(self.db, vec![game_match])
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError(format!("Match {} was not assembled", id)))
    }

    /// Searches matches
    ///
    /// Defaults to the latest matches first.
    pub async fn search(
        &self,
        filter: &MatchSearchFilter,
        request: &PageRequest,
    ) -> Result<Page<Match>, AppError> {
        let sort = request.resolve_sort(&DEFAULT_SORT)?;

        let (matches, total) = GameMatchRepository::new(self.db)
            .search(filter, &sort, request.page, request.size)
            .await?;

        let matches = assemble_matches(self.db, matches).await?;

        Ok(Page::new(matches, total, request))
    }

    /// Updates a match
    ///
    /// The result is re-derived from the resulting participants and winner; a winner
    /// who no longer takes part in the match is rejected.
    pub async fn update(&self, mut params: UpdateMatchParams) -> Result<Match, AppError> {
        let repo = GameMatchRepository::new(self.db);
        let id = params.id;

        let existing = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Match", id))?;

        let player_one_id = params.player_one_id.unwrap_or(existing.player_one_id);
        let player_two_id = params.player_two_id.unwrap_or(existing.player_two_id);
        let winner_id = params.winner_id.or(existing.winner_id);

        let loser_id = resolve_result(player_one_id, player_two_id, winner_id)
            .inspect_err(|err| tracing::warn!(match_id = id, error = %err, "Rejected match result"))?;

        for player_id in [params.player_one_id, params.player_two_id].into_iter().flatten() {
            self.find_player(player_id).await?;
        }
        if let Some(contest_id) = params.contest_id {
            self.ensure_contest_exists(contest_id).await?;
        }

        params.winner_id = winner_id;
        repo.update(params, loser_id)
            .await?
            .ok_or_else(|| AppError::not_found("Match", id))?;
        tracing::info!(match_id = id, "Updated match");

        self.get_by_id(id).await
    }

    /// Soft deletes a match
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        GameMatchRepository::new(self.db)
            .soft_delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Match", id))?;
        tracing::info!(match_id = id, "Deleted match");

        Ok(())
    }

    async fn find_player(&self, id: i32) -> Result<entity::player::Model, AppError> {
        PlayerRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Player", id))
    }

    async fn ensure_contest_exists(&self, id: i32) -> Result<(), AppError> {
        match ContestRepository::new(self.db).get_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found("Contest", id)),
        }
    }
}

/// Resolves participants and contests for match rows, preserving their order
///
/// Loads every referenced player and contest in one query each.
pub async fn assemble_matches(
    db: &DatabaseConnection,
    matches: Vec<entity::game_match::Model>,
) -> Result<Vec<Match>, AppError> {
    let player_ids: Vec<i32> = matches
        .iter()
        .flat_map(|m| [m.player_one_id, m.player_two_id])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let contest_ids: Vec<i32> = matches
        .iter()
        .filter_map(|m| m.contest_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let players: HashMap<i32, Player> = PlayerRepository::new(db)
        .get_many(&player_ids)
        .await?
        .into_iter()
        .map(|(id, player)| (id, Player::from_entity(player)))
        .collect();
    let contests: HashMap<i32, ContestRef> = ContestRepository::new(db)
        .get_many(&contest_ids)
        .await?
        .into_iter()
        .map(|(id, contest)| (id, ContestRef::from_entity(contest)))
        .collect();

    matches
        .into_iter()
        .map(|game_match| Match::from_entity(game_match, &players, &contests))
        .collect()
}
