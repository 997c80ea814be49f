use entity::sea_orm_active_enums::EntityStatus;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

/// Clan membership history of players.
///
/// A player has at most one `REGISTERED` membership at a time; older ones are `EXPIRED` with
/// an exit time.
pub struct PlayerClanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerClanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the current membership and clan of each given player
    ///
    /// The current membership is the latest `REGISTERED` row by join time, then by id.
    /// Players without one are absent from the returned map.
    pub async fn current_for_players(
        &self,
        player_ids: &[i32],
    ) -> Result<HashMap<i32, (entity::player_clan::Model, entity::clan::Model)>, DbErr> {
        if player_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::PlayerClan::find()
            .filter(entity::player_clan::Column::PlayerId.is_in(player_ids.iter().copied()))
            .filter(entity::player_clan::Column::Status.eq(EntityStatus::Registered))
            .order_by_desc(entity::player_clan::Column::JoinedAt)
            .order_by_desc(entity::player_clan::Column::Id)
            .find_also_related(entity::prelude::Clan)
            .all(self.db)
            .await?;

        let mut current = HashMap::new();
        for (membership, clan) in rows {
            if let Some(clan) = clan {
                current.entry(membership.player_id).or_insert((membership, clan));
            }
        }

        Ok(current)
    }

    /// Moves a player into a clan
    ///
    /// Expires every open membership of the player, then opens a new one, in a single
    /// transaction.
    pub async fn switch_clan(
        &self,
        player_id: i32,
        clan_id: i32,
    ) -> Result<entity::player_clan::Model, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        entity::prelude::PlayerClan::update_many()
            .set(entity::player_clan::ActiveModel {
                status: ActiveValue::Set(EntityStatus::Expired),
                exited_at: ActiveValue::Set(Some(now)),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::player_clan::Column::PlayerId.eq(player_id))
            .filter(entity::player_clan::Column::Status.eq(EntityStatus::Registered))
            .exec(&txn)
            .await?;

        let membership = open_membership(&txn, player_id, clan_id, now).await?;

        txn.commit().await?;

        Ok(membership)
    }

    /// Gets every membership of a player with its clan, newest first
    pub async fn history(
        &self,
        player_id: i32,
    ) -> Result<Vec<(entity::player_clan::Model, entity::clan::Model)>, DbErr> {
        let rows = entity::prelude::PlayerClan::find()
            .filter(entity::player_clan::Column::PlayerId.eq(player_id))
            .order_by_desc(entity::player_clan::Column::JoinedAt)
            .order_by_desc(entity::player_clan::Column::Id)
            .find_also_related(entity::prelude::Clan)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(membership, clan)| clan.map(|clan| (membership, clan)))
            .collect())
    }
}

/// Inserts a `REGISTERED` membership joined at `now`
///
/// Runs on the caller's connection so it can join an open transaction.
pub(crate) async fn open_membership<C: ConnectionTrait>(
    conn: &C,
    player_id: i32,
    clan_id: i32,
    now: DateTime<Utc>,
) -> Result<entity::player_clan::Model, DbErr> {
    entity::player_clan::ActiveModel {
        player_id: ActiveValue::Set(player_id),
        clan_id: ActiveValue::Set(clan_id),
        status: ActiveValue::Set(EntityStatus::Registered),
        joined_at: ActiveValue::Set(now),
        exited_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(conn)
    .await
}
