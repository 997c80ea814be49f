use chrono::Utc;
use entity::sea_orm_active_enums::EntityStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::{
    data::{like, player_clan::open_membership},
    model::{
        page::SortDirection,
        player::{
            CreatePlayerParams, PlayerListFilter, PlayerSort, PlayerStats, UpdatePlayerParams,
        },
        status::deleted_at_for,
    },
};

const WINS_EXPR: &str = "(SELECT COUNT(*) FROM matches m \
    WHERE m.winner_id = players.id AND m.status <> 'DELETED')";
const LOSSES_EXPR: &str = "(SELECT COUNT(*) FROM matches m \
    WHERE m.loser_id = players.id AND m.status <> 'DELETED')";
const TOTAL_MATCHES_EXPR: &str = "(SELECT COUNT(*) FROM matches m \
    WHERE (m.player_one_id = players.id OR m.player_two_id = players.id) \
    AND m.status <> 'DELETED')";

pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new registered player, optionally opening a membership in `clan_id`
    ///
    /// The player row and the membership are written in one transaction, so a failed
    /// membership insert leaves no player behind.
    pub async fn create(
        &self,
        params: &CreatePlayerParams,
        clan_id: Option<i32>,
    ) -> Result<entity::player::Model, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let player = entity::player::ActiveModel {
            nickname: ActiveValue::Set(params.nickname.clone()),
            race: ActiveValue::Set(params.race),
            grade_id: ActiveValue::Set(params.grade_id),
            status: ActiveValue::Set(EntityStatus::Registered),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if let Some(clan_id) = clan_id {
            open_membership(&txn, player.id, clan_id, now).await?;
        }

        txn.commit().await?;

        Ok(player)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find_by_id(id).one(self.db).await
    }

    /// Finds a player by exact nickname
    pub async fn find_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::Nickname.eq(nickname))
            .one(self.db)
            .await
    }

    /// Gets the players with the given ids keyed by id
    ///
    /// Unknown ids are absent from the returned map.
    pub async fn get_many(
        &self,
        ids: &[i32],
    ) -> Result<HashMap<i32, entity::player::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let players = entity::prelude::Player::find()
            .filter(entity::player::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(players.into_iter().map(|p| (p.id, p)).collect())
    }

    /// Gets a page of players
    ///
    /// Without `include_deleted` only registered players are listed; with it, deleted players
    /// are listed too. Sorting by wins, losses or total matches counts non-deleted matches.
    ///
    /// # Returns
    /// - `Ok((players, total))` - Players on the requested page and the total across all pages
    pub async fn get_paginated(
        &self,
        filter: &PlayerListFilter,
        sort: &[(PlayerSort, SortDirection)],
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::player::Model>, u64), DbErr> {
        let mut query = entity::prelude::Player::find();

        query = if filter.include_deleted {
            query.filter(
                entity::player::Column::Status
                    .is_in([EntityStatus::Registered, EntityStatus::Deleted]),
            )
        } else {
            query.filter(entity::player::Column::Status.eq(EntityStatus::Registered))
        };

        if let Some(nickname) = &filter.nickname {
            query =
                query.filter(entity::player::Column::Nickname.like(like::contains(nickname)));
        }

        for (field, direction) in sort {
            let order = direction.order();
            query = match field {
                PlayerSort::Nickname => query.order_by(entity::player::Column::Nickname, order),
                PlayerSort::CreatedAt => query.order_by(entity::player::Column::CreatedAt, order),
                PlayerSort::Id => query.order_by(entity::player::Column::Id, order),
                PlayerSort::Wins => query.order_by(Expr::cust(WINS_EXPR), order),
                PlayerSort::Losses => query.order_by(Expr::cust(LOSSES_EXPR), order),
                PlayerSort::TotalMatches => query.order_by(Expr::cust(TOTAL_MATCHES_EXPR), order),
            };
        }

        let paginator = query.paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let players = paginator.fetch_page(page).await?;

        Ok((players, total))
    }

    /// Applies the provided fields to a player
    ///
    /// Returns None if the player doesn't exist. `clan_name` is ignored here.
    pub async fn update(
        &self,
        params: &UpdatePlayerParams,
    ) -> Result<Option<entity::player::Model>, DbErr> {
        let Some(player) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let deleted_at = player.deleted_at;
        let mut active: entity::player::ActiveModel = player.into();

        if let Some(nickname) = &params.nickname {
            active.nickname = ActiveValue::Set(nickname.clone());
        }
        if let Some(race) = params.race {
            active.race = ActiveValue::Set(Some(race));
        }
        if let Some(grade_id) = params.grade_id {
            active.grade_id = ActiveValue::Set(Some(grade_id));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
            active.deleted_at = ActiveValue::Set(deleted_at_for(status, deleted_at, now));
        }
        active.updated_at = ActiveValue::Set(now);

        active.update(self.db).await.map(Some)
    }

    /// Soft deletes a player
    ///
    /// Returns None if the player doesn't exist
    pub async fn soft_delete(&self, id: i32) -> Result<Option<entity::player::Model>, DbErr> {
        self.update(&UpdatePlayerParams {
            id,
            nickname: None,
            race: None,
            grade_id: None,
            status: Some(EntityStatus::Deleted),
            clan_name: None,
        })
        .await
    }

    /// Counts registered players
    pub async fn count_registered(&self) -> Result<u64, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::Status.eq(EntityStatus::Registered))
            .count(self.db)
            .await
    }

    /// Computes win, loss and match totals over non-deleted matches for each given player
    ///
    /// Players without matches are absent from the returned map.
    pub async fn stats(&self, ids: &[i32]) -> Result<HashMap<i32, PlayerStats>, DbErr> {
        let mut stats: HashMap<i32, PlayerStats> = HashMap::new();
        if ids.is_empty() {
            return Ok(stats);
        }

        for (id, count) in self.count_matches_by(entity::game_match::Column::WinnerId, ids).await? {
            stats.entry(id).or_default().wins = count;
        }
        for (id, count) in self.count_matches_by(entity::game_match::Column::LoserId, ids).await? {
            stats.entry(id).or_default().losses = count;
        }
        for column in [
            entity::game_match::Column::PlayerOneId,
            entity::game_match::Column::PlayerTwoId,
        ] {
            for (id, count) in self.count_matches_by(column, ids).await? {
                stats.entry(id).or_default().total_matches += count;
            }
        }

        Ok(stats)
    }

    async fn count_matches_by(
        &self,
        column: entity::game_match::Column,
        ids: &[i32],
    ) -> Result<Vec<(i32, u64)>, DbErr> {
        let rows: Vec<(i32, i64)> = entity::prelude::GameMatch::find()
            .select_only()
            .column(column)
            .column_as(entity::game_match::Column::Id.count(), "match_count")
            .filter(column.is_in(ids.iter().copied()))
            .filter(entity::game_match::Column::Status.ne(EntityStatus::Deleted))
            .group_by(column)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, count)| (id, count as u64))
            .collect())
    }
}
