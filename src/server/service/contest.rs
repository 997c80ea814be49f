use sea_orm::DatabaseConnection;

use crate::server::{
    data::{contest::ContestRepository, game_match::GameMatchRepository, player::PlayerRepository},
    error::AppError,
    model::{
        contest::{Contest, ContestDetail, ContestSort, CreateContestParams, UpdateContestParams},
        page::{Page, PageRequest, SortDirection},
        player::Player,
    },
    service::game_match::assemble_matches,
};

const DEFAULT_SORT: [(ContestSort, SortDirection); 1] = [(ContestSort::Id, SortDirection::Desc)];

pub struct ContestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateContestParams) -> Result<ContestDetail, AppError> {
        let contest = ContestRepository::new(self.db).create(params).await?;
        tracing::info!(contest_id = contest.id, name = %contest.name, "Created contest");

        Ok(ContestDetail {
            contest: Contest::from_entity(contest),
            participants: Vec::new(),
            matches: Vec::new(),
        })
    }

    /// Gets a contest with its participants and non-deleted matches
    pub async fn get_by_id(&self, id: i32) -> Result<ContestDetail, AppError> {
        let repo = ContestRepository::new(self.db);

        let contest = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Contest", id))?;
        let participants = repo.participants(id).await?;
        let matches = GameMatchRepository::new(self.db).by_contest(id).await?;

        Ok(ContestDetail {
            contest: Contest::from_entity(contest),
            participants: participants.into_iter().map(Player::from_entity).collect(),
            matches: assemble_matches(self.db, matches).await?,
        })
    }

    /// Gets a page of contests paired with their participant counts
    pub async fn get_paginated(
        &self,
        include_deleted: bool,
        request: &PageRequest,
    ) -> Result<Page<(Contest, u64)>, AppError> {
        let repo = ContestRepository::new(self.db);
        let sort = request.resolve_sort(&DEFAULT_SORT)?;

        let (contests, total) = repo
            .get_paginated(include_deleted, &sort, request.page, request.size)
            .await?;

        let ids: Vec<i32> = contests.iter().map(|c| c.id).collect();
        let counts = repo.participant_counts(&ids).await?;

        let items = contests
            .into_iter()
            .map(|contest| {
                let count = counts.get(&contest.id).copied().unwrap_or(0);
                (Contest::from_entity(contest), count)
            })
            .collect();

        Ok(Page::new(items, total, request))
    }

    pub async fn update(&self, params: UpdateContestParams) -> Result<ContestDetail, AppError> {
        let id = params.id;

        ContestRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::not_found("Contest", id))?;
        tracing::info!(contest_id = id, "Updated contest");

        self.get_by_id(id).await
    }

    /// Soft deletes a contest
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        ContestRepository::new(self.db)
            .soft_delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Contest", id))?;
        tracing::info!(contest_id = id, "Deleted contest");

        Ok(())
    }

    /// Registers a player to a contest
    ///
    /// Registering an existing participant again leaves the contest unchanged.
    pub async fn add_participant(
        &self,
        contest_id: i32,
        player_id: i32,
    ) -> Result<ContestDetail, AppError> {
        let repo = ContestRepository::new(self.db);

        if repo.get_by_id(contest_id).await?.is_none() {
            return Err(AppError::not_found("Contest", contest_id));
        }
        if PlayerRepository::new(self.db)
            .get_by_id(player_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("Player", player_id));
        }

        if repo.add_participant(contest_id, player_id).await? {
            tracing::info!(contest_id, player_id, "Registered contest participant");
        }

        self.get_by_id(contest_id).await
    }

    /// Removes a player from a contest
    pub async fn remove_participant(&self, contest_id: i32, player_id: i32) -> Result<(), AppError> {
        let repo = ContestRepository::new(self.db);

        if repo.get_by_id(contest_id).await?.is_none() {
            return Err(AppError::not_found("Contest", contest_id));
        }
        if !repo.remove_participant(contest_id, player_id).await? {
            return Err(AppError::NotFound(format!(
                "Player {} is not a participant of contest {}",
                player_id, contest_id
            )));
        }
        tracing::info!(contest_id, player_id, "Removed contest participant");

        Ok(())
    }
}
