use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::EntityStatus;
use sea_orm::{
    sea_query::{Expr, NullOrdering, SelectStatement},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, FromQueryResult, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, Select, Statement, Value,
};

use crate::server::{
    data::like,
    model::{
        game_match::{CreateMatchParams, MatchSearchFilter, MatchSort, UpdateMatchParams},
        page::SortDirection,
        player::PlayerMatchFilter,
        status::deleted_at_for,
    },
};

const PLAYER_ONE_NICKNAME_EXPR: &str =
    "(SELECT nickname FROM players WHERE players.id = matches.player_one_id)";
const PLAYER_TWO_NICKNAME_EXPR: &str =
    "(SELECT nickname FROM players WHERE players.id = matches.player_two_id)";

/// Opponent and winner of each registered match of a player; binds the player id three times.
const OPPONENTS_CTE: &str = "WITH player_matches AS ( \
    SELECT CASE WHEN m.player_one_id = ? THEN m.player_two_id ELSE m.player_one_id END AS opponent_id, \
    m.winner_id AS winner_id \
    FROM matches m \
    WHERE (m.player_one_id = ? OR m.player_two_id = ?) AND m.status = 'REGISTERED' \
    ) ";

/// One row of the head-to-head aggregation for a player
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct OpponentStatsRow {
    pub opponent_id: i32,
    pub total_count: i64,
    pub wins: i64,
    pub losses: i64,
}

#[derive(Debug, FromQueryResult)]
struct CountRow {
    total: i64,
}

pub struct GameMatchRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameMatchRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new registered match
    ///
    /// Races must already be resolved and `loser_id` derived from the winner.
    pub async fn create(
        &self,
        params: CreateMatchParams,
        loser_id: Option<i32>,
    ) -> Result<entity::game_match::Model, DbErr> {
        let now = Utc::now();

        entity::game_match::ActiveModel {
            player_one_id: ActiveValue::Set(params.player_one_id),
            player_two_id: ActiveValue::Set(params.player_two_id),
            player_one_race: ActiveValue::Set(params.player_one_race),
            player_two_race: ActiveValue::Set(params.player_two_race),
            winner_id: ActiveValue::Set(params.winner_id),
            loser_id: ActiveValue::Set(loser_id),
            map_name: ActiveValue::Set(params.map_name),
            description: ActiveValue::Set(params.description),
            streaming_url: ActiveValue::Set(params.streaming_url),
            contest_id: ActiveValue::Set(params.contest_id),
            match_time: ActiveValue::Set(Some(params.match_time.unwrap_or(now))),
            status: ActiveValue::Set(EntityStatus::Registered),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::game_match::Model>, DbErr> {
        entity::prelude::GameMatch::find_by_id(id).one(self.db).await
    }

    /// Applies the provided fields to a match
    ///
    /// `loser_id` is always written; it must be derived from the match's resulting
    /// participants and winner. Returns None if the match doesn't exist.
    pub async fn update(
        &self,
        params: UpdateMatchParams,
        loser_id: Option<i32>,
    ) -> Result<Option<entity::game_match::Model>, DbErr> {
        let Some(game_match) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let deleted_at = game_match.deleted_at;
        let mut active: entity::game_match::ActiveModel = game_match.into();

        if let Some(player_one_id) = params.player_one_id {
            active.player_one_id = ActiveValue::Set(player_one_id);
        }
        if let Some(player_two_id) = params.player_two_id {
            active.player_two_id = ActiveValue::Set(player_two_id);
        }
        if let Some(race) = params.player_one_race {
            active.player_one_race = ActiveValue::Set(Some(race));
        }
        if let Some(race) = params.player_two_race {
            active.player_two_race = ActiveValue::Set(Some(race));
        }
        if let Some(winner_id) = params.winner_id {
            active.winner_id = ActiveValue::Set(Some(winner_id));
        }
        active.loser_id = ActiveValue::Set(loser_id);
        if let Some(map_name) = params.map_name {
            active.map_name = ActiveValue::Set(Some(map_name));
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(streaming_url) = params.streaming_url {
            active.streaming_url = ActiveValue::Set(Some(streaming_url));
        }
        if let Some(match_time) = params.match_time {
            active.match_time = ActiveValue::Set(Some(match_time));
        }
        if let Some(contest_id) = params.contest_id {
            active.contest_id = ActiveValue::Set(Some(contest_id));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
            active.deleted_at = ActiveValue::Set(deleted_at_for(status, deleted_at, now));
        }
        active.updated_at = ActiveValue::Set(now);

        active.update(self.db).await.map(Some)
    }

    /// Soft deletes a match, keeping its result
    ///
    /// Returns None if the match doesn't exist
    pub async fn soft_delete(&self, id: i32) -> Result<Option<entity::game_match::Model>, DbErr> {
        let Some(game_match) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let deleted_at = game_match.deleted_at;
        let mut active: entity::game_match::ActiveModel = game_match.into();
        active.status = ActiveValue::Set(EntityStatus::Deleted);
        active.deleted_at = ActiveValue::Set(deleted_at_for(EntityStatus::Deleted, deleted_at, now));
        active.updated_at = ActiveValue::Set(now);

        active.update(self.db).await.map(Some)
    }

    /// Searches matches by participant nicknames, map and time range
    ///
    /// Each nickname filter matches either participant; both filters must hold when given.
    /// `id desc` is always the final ordering.
    pub async fn search(
        &self,
        filter: &MatchSearchFilter,
        sort: &[(MatchSort, SortDirection)],
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::game_match::Model>, u64), DbErr> {
        let mut query = visible(entity::prelude::GameMatch::find(), filter.include_deleted);

        for nickname in [&filter.player_one_nickname, &filter.player_two_nickname]
            .into_iter()
            .flatten()
        {
            query = query.filter(
                Condition::any()
                    .add(entity::game_match::Column::PlayerOneId.in_subquery(ids_by_nickname(nickname)))
                    .add(entity::game_match::Column::PlayerTwoId.in_subquery(ids_by_nickname(nickname))),
            );
        }
        query = filter_map_and_time(
            query,
            filter.map_name.as_deref(),
            filter.started_at,
            filter.ended_at,
        );

        for (field, direction) in sort {
            let order = direction.order();
            query = match field {
                MatchSort::PlayerOneNickname => {
                    query.order_by(Expr::cust(PLAYER_ONE_NICKNAME_EXPR), order)
                }
                MatchSort::PlayerTwoNickname => {
                    query.order_by(Expr::cust(PLAYER_TWO_NICKNAME_EXPR), order)
                }
                MatchSort::MatchTime => query.order_by_with_nulls(
                    entity::game_match::Column::MatchTime,
                    order,
                    NullOrdering::Last,
                ),
                MatchSort::MapName => query.order_by(entity::game_match::Column::MapName, order),
                MatchSort::CreatedAt => {
                    query.order_by(entity::game_match::Column::CreatedAt, order)
                }
                MatchSort::Id => query.order_by(entity::game_match::Column::Id, order),
            };
        }
        query = query.order_by_desc(entity::game_match::Column::Id);

        let paginator = query.paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let matches = paginator.fetch_page(page).await?;

        Ok((matches, total))
    }

    /// Gets a page of matches the player took part in, latest first
    ///
    /// `opponent_nickname` filters on the other participant only.
    pub async fn for_player(
        &self,
        player_id: i32,
        filter: &PlayerMatchFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::game_match::Model>, u64), DbErr> {
        let mut query = visible(entity::prelude::GameMatch::find(), filter.include_deleted)
            .filter(
                Condition::any()
                    .add(entity::game_match::Column::PlayerOneId.eq(player_id))
                    .add(entity::game_match::Column::PlayerTwoId.eq(player_id)),
            );

        if let Some(nickname) = &filter.opponent_nickname {
            query = query.filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(entity::game_match::Column::PlayerOneId.eq(player_id))
                            .add(
                                entity::game_match::Column::PlayerTwoId
                                    .in_subquery(ids_by_nickname(nickname)),
                            ),
                    )
                    .add(
                        Condition::all()
                            .add(entity::game_match::Column::PlayerTwoId.eq(player_id))
                            .add(
                                entity::game_match::Column::PlayerOneId
                                    .in_subquery(ids_by_nickname(nickname)),
                            ),
                    ),
            );
        }

        query = filter_map_and_time(
            query,
            filter.map_name.as_deref(),
            filter.started_at,
            filter.ended_at,
        );

        let paginator = latest_first(query).paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let matches = paginator.fetch_page(page).await?;

        Ok((matches, total))
    }

    /// Aggregates a player's registered matches per opponent
    ///
    /// Rows are ordered by match count descending, then opponent id.
    ///
    /// # Returns
    /// - `Ok((rows, total))` - Rows on the requested page and the number of distinct opponents
    pub async fn opponent_stats(
        &self,
        player_id: i32,
        opponent_nickname: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<OpponentStatsRow>, u64), DbErr> {
        let backend = self.db.get_database_backend();
        let cte_values: Vec<Value> = vec![player_id.into(), player_id.into(), player_id.into()];

        let mut where_clause = String::new();
        let mut filter_values: Vec<Value> = Vec::new();
        if let Some(nickname) = opponent_nickname {
            where_clause.push_str("WHERE p.nickname LIKE ? ESCAPE '\\' ");
            filter_values.push(like::contains_pattern(nickname).into());
        }

        let mut values = cte_values.clone();
        values.push(player_id.into());
        values.extend(filter_values.iter().cloned());
        values.push(i64::try_from(per_page).unwrap_or(i64::MAX).into());
        values.push(
            i64::try_from(page.saturating_mul(per_page))
                .unwrap_or(i64::MAX)
                .into(),
        );

        let sql = format!(
            "{OPPONENTS_CTE}\
             SELECT pm.opponent_id AS opponent_id, \
             COUNT(*) AS total_count, \
             SUM(CASE WHEN pm.winner_id = ? THEN 1 ELSE 0 END) AS wins, \
             SUM(CASE WHEN pm.winner_id = pm.opponent_id THEN 1 ELSE 0 END) AS losses \
             FROM player_matches pm \
             JOIN players p ON p.id = pm.opponent_id \
             {where_clause}\
             GROUP BY pm.opponent_id \
             ORDER BY total_count DESC, pm.opponent_id ASC \
             LIMIT ? OFFSET ?"
        );

        let rows = OpponentStatsRow::find_by_statement(Statement::from_sql_and_values(
            backend, sql, values,
        ))
        .all(self.db)
        .await?;

        let mut count_values = cte_values;
        count_values.extend(filter_values);
        let count_sql = format!(
            "{OPPONENTS_CTE}\
             SELECT COUNT(DISTINCT pm.opponent_id) AS total \
             FROM player_matches pm \
             JOIN players p ON p.id = pm.opponent_id \
             {where_clause}"
        );

        let total = CountRow::find_by_statement(Statement::from_sql_and_values(
            backend,
            count_sql,
            count_values,
        ))
        .one(self.db)
        .await?
        .map(|row| row.total as u64)
        .unwrap_or(0);

        Ok((rows, total))
    }

    /// Gets the most recent registered matches
    pub async fn latest(&self, limit: u64) -> Result<Vec<entity::game_match::Model>, DbErr> {
        latest_first(
            entity::prelude::GameMatch::find()
                .filter(entity::game_match::Column::Status.eq(EntityStatus::Registered)),
        )
        .limit(limit)
        .all(self.db)
        .await
    }

    /// Counts registered matches
    pub async fn count_registered(&self) -> Result<u64, DbErr> {
        entity::prelude::GameMatch::find()
            .filter(entity::game_match::Column::Status.eq(EntityStatus::Registered))
            .count(self.db)
            .await
    }

    /// Gets the non-deleted matches played within a contest, latest first
    pub async fn by_contest(
        &self,
        contest_id: i32,
    ) -> Result<Vec<entity::game_match::Model>, DbErr> {
        latest_first(
            entity::prelude::GameMatch::find()
                .filter(entity::game_match::Column::ContestId.eq(contest_id))
                .filter(entity::game_match::Column::Status.ne(EntityStatus::Deleted)),
        )
        .all(self.db)
        .await
    }
}

/// Restricts to registered matches, plus deleted ones when requested
fn visible(
    query: Select<entity::prelude::GameMatch>,
    include_deleted: bool,
) -> Select<entity::prelude::GameMatch> {
    if include_deleted {
        query.filter(
            entity::game_match::Column::Status
                .is_in([EntityStatus::Registered, EntityStatus::Deleted]),
        )
    } else {
        query.filter(entity::game_match::Column::Status.eq(EntityStatus::Registered))
    }
}

/// Applies the map substring and inclusive match time bounds
fn filter_map_and_time(
    mut query: Select<entity::prelude::GameMatch>,
    map_name: Option<&str>,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
) -> Select<entity::prelude::GameMatch> {
    if let Some(map_name) = map_name {
        query =
            query.filter(entity::game_match::Column::MapName.like(like::contains(map_name)));
    }
    if let Some(started_at) = started_at {
        query = query.filter(entity::game_match::Column::MatchTime.gte(started_at));
    }
    if let Some(ended_at) = ended_at {
        query = query.filter(entity::game_match::Column::MatchTime.lte(ended_at));
    }
    query
}

fn latest_first(query: Select<entity::prelude::GameMatch>) -> Select<entity::prelude::GameMatch> {
    query
        .order_by_with_nulls(
            entity::game_match::Column::MatchTime,
            Order::Desc,
            NullOrdering::Last,
        )
        .order_by_desc(entity::game_match::Column::Id)
}

fn ids_by_nickname(nickname: &str) -> SelectStatement {
    entity::prelude::Player::find()
        .select_only()
        .column(entity::player::Column::Id)
        .filter(entity::player::Column::Nickname.like(like::contains(nickname)))
        .into_query()
}
