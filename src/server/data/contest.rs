use chrono::Utc;
use entity::sea_orm_active_enums::EntityStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};
use std::collections::HashMap;

use crate::server::model::{
    contest::{ContestSort, CreateContestParams, UpdateContestParams},
    page::SortDirection,
    status::deleted_at_for,
};

pub struct ContestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new registered contest
    pub async fn create(
        &self,
        params: CreateContestParams,
    ) -> Result<entity::contest::Model, DbErr> {
        let now = Utc::now();

        entity::contest::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(EntityStatus::Registered),
            started_at: ActiveValue::Set(params.started_at),
            ended_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::contest::Model>, DbErr> {
        entity::prelude::Contest::find_by_id(id).one(self.db).await
    }

    /// Gets the contests with the given ids keyed by id
    pub async fn get_many(
        &self,
        ids: &[i32],
    ) -> Result<HashMap<i32, entity::contest::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let contests = entity::prelude::Contest::find()
            .filter(entity::contest::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(contests.into_iter().map(|c| (c.id, c)).collect())
    }

    /// Gets a page of contests
    ///
    /// Soft-deleted contests are skipped unless `include_deleted` is set.
    pub async fn get_paginated(
        &self,
        include_deleted: bool,
        sort: &[(ContestSort, SortDirection)],
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::contest::Model>, u64), DbErr> {
        let mut query = entity::prelude::Contest::find();

        if !include_deleted {
            query = query.filter(entity::contest::Column::Status.ne(EntityStatus::Deleted));
        }

        for (field, direction) in sort {
            let column = match field {
                ContestSort::Name => entity::contest::Column::Name,
                ContestSort::StartedAt => entity::contest::Column::StartedAt,
                ContestSort::CreatedAt => entity::contest::Column::CreatedAt,
                ContestSort::Id => entity::contest::Column::Id,
            };
            query = query.order_by(column, direction.order());
        }

        let paginator = query.paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let contests = paginator.fetch_page(page).await?;

        Ok((contests, total))
    }

    /// Applies the provided fields to a contest
    ///
    /// Returns None if the contest doesn't exist
    pub async fn update(
        &self,
        params: UpdateContestParams,
    ) -> Result<Option<entity::contest::Model>, DbErr> {
        let Some(contest) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let deleted_at = contest.deleted_at;
        let mut active: entity::contest::ActiveModel = contest.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(ended_at) = params.ended_at {
            active.ended_at = ActiveValue::Set(Some(ended_at));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
            active.deleted_at = ActiveValue::Set(deleted_at_for(status, deleted_at, now));
        }
        active.updated_at = ActiveValue::Set(now);

        active.update(self.db).await.map(Some)
    }

    /// Soft deletes a contest
    ///
    /// Returns None if the contest doesn't exist
    pub async fn soft_delete(&self, id: i32) -> Result<Option<entity::contest::Model>, DbErr> {
        self.update(UpdateContestParams {
            id,
            name: None,
            description: None,
            ended_at: None,
            status: Some(EntityStatus::Deleted),
        })
        .await
    }

    /// Counts participants of each given contest
    ///
    /// Contests without participants are absent from the returned map.
    pub async fn participant_counts(
        &self,
        contest_ids: &[i32],
    ) -> Result<HashMap<i32, u64>, DbErr> {
        if contest_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = entity::prelude::ContestParticipant::find()
            .select_only()
            .column(entity::contest_participant::Column::ContestId)
            .column_as(
                entity::contest_participant::Column::PlayerId.count(),
                "participant_count",
            )
            .filter(
                entity::contest_participant::Column::ContestId.is_in(contest_ids.iter().copied()),
            )
            .group_by(entity::contest_participant::Column::ContestId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(contest_id, count)| (contest_id, count as u64))
            .collect())
    }

    /// Gets the players registered to a contest, ordered by nickname
    pub async fn participants(
        &self,
        contest_id: i32,
    ) -> Result<Vec<entity::player::Model>, DbErr> {
        let player_ids = entity::prelude::ContestParticipant::find()
            .select_only()
            .column(entity::contest_participant::Column::PlayerId)
            .filter(entity::contest_participant::Column::ContestId.eq(contest_id))
            .into_query();

        entity::prelude::Player::find()
            .filter(entity::player::Column::Id.in_subquery(player_ids))
            .order_by_asc(entity::player::Column::Nickname)
            .all(self.db)
            .await
    }

    /// Registers a player to a contest
    ///
    /// Returns false if the player was already registered.
    pub async fn add_participant(&self, contest_id: i32, player_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::ContestParticipant::find_by_id((contest_id, player_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        entity::contest_participant::ActiveModel {
            contest_id: ActiveValue::Set(contest_id),
            player_id: ActiveValue::Set(player_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes a player from a contest
    ///
    /// Returns false if the player wasn't registered.
    pub async fn remove_participant(
        &self,
        contest_id: i32,
        player_id: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::ContestParticipant::delete_by_id((contest_id, player_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
