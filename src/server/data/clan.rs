use chrono::Utc;
use entity::sea_orm_active_enums::EntityStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};
use std::collections::HashMap;

use crate::server::model::{
    clan::{ClanSort, CreateClanParams, UpdateClanParams},
    page::SortDirection,
    status::deleted_at_for,
};

pub struct ClanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new registered clan
    pub async fn create(&self, params: CreateClanParams) -> Result<entity::clan::Model, DbErr> {
        let now = Utc::now();

        entity::clan::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            founding_date: ActiveValue::Set(params.founding_date),
            closing_date: ActiveValue::Set(None),
            status: ActiveValue::Set(EntityStatus::Registered),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::clan::Model>, DbErr> {
        entity::prelude::Clan::find_by_id(id).one(self.db).await
    }

    /// Finds a clan by its exact name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::clan::Model>, DbErr> {
        entity::prelude::Clan::find()
            .filter(entity::clan::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets a page of clans
    ///
    /// Soft-deleted clans are skipped unless `include_deleted` is set.
    pub async fn get_paginated(
        &self,
        include_deleted: bool,
        sort: &[(ClanSort, SortDirection)],
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::clan::Model>, u64), DbErr> {
        let mut query = entity::prelude::Clan::find();

        if !include_deleted {
            query = query.filter(entity::clan::Column::Status.ne(EntityStatus::Deleted));
        }

        for (field, direction) in sort {
            let column = match field {
                ClanSort::Name => entity::clan::Column::Name,
                ClanSort::FoundingDate => entity::clan::Column::FoundingDate,
                ClanSort::CreatedAt => entity::clan::Column::CreatedAt,
                ClanSort::Id => entity::clan::Column::Id,
            };
            query = query.order_by(column, direction.order());
        }

        let paginator = query.paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let clans = paginator.fetch_page(page).await?;

        Ok((clans, total))
    }

    /// Applies the provided fields to a clan
    ///
    /// Returns None if the clan doesn't exist
    pub async fn update(
        &self,
        params: UpdateClanParams,
    ) -> Result<Option<entity::clan::Model>, DbErr> {
        let Some(clan) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let deleted_at = clan.deleted_at;
        let mut active: entity::clan::ActiveModel = clan.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(closing_date) = params.closing_date {
            active.closing_date = ActiveValue::Set(Some(closing_date));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
            active.deleted_at = ActiveValue::Set(deleted_at_for(status, deleted_at, now));
        }
        active.updated_at = ActiveValue::Set(now);

        active.update(self.db).await.map(Some)
    }

    /// Soft deletes a clan
    ///
    /// Returns None if the clan doesn't exist
    pub async fn soft_delete(&self, id: i32) -> Result<Option<entity::clan::Model>, DbErr> {
        self.update(UpdateClanParams {
            id,
            name: None,
            description: None,
            closing_date: None,
            status: Some(EntityStatus::Deleted),
        })
        .await
    }

    /// Counts registered clans
    pub async fn count_registered(&self) -> Result<u64, DbErr> {
        entity::prelude::Clan::find()
            .filter(entity::clan::Column::Status.eq(EntityStatus::Registered))
            .count(self.db)
            .await
    }

    /// Counts open memberships for each of the given clans
    ///
    /// Clans without members are absent from the returned map.
    pub async fn member_counts(&self, clan_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if clan_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = entity::prelude::PlayerClan::find()
            .select_only()
            .column(entity::player_clan::Column::ClanId)
            .column_as(entity::player_clan::Column::Id.count(), "member_count")
            .filter(entity::player_clan::Column::ClanId.is_in(clan_ids.iter().copied()))
            .filter(entity::player_clan::Column::Status.eq(EntityStatus::Registered))
            .group_by(entity::player_clan::Column::ClanId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(clan_id, count)| (clan_id, count as u64))
            .collect())
    }

    /// Gets the non-deleted players with an open membership in the clan, by nickname
    pub async fn members(&self, clan_id: i32) -> Result<Vec<entity::player::Model>, DbErr> {
        let member_ids = entity::prelude::PlayerClan::find()
            .select_only()
            .column(entity::player_clan::Column::PlayerId)
            .filter(entity::player_clan::Column::ClanId.eq(clan_id))
            .filter(entity::player_clan::Column::Status.eq(EntityStatus::Registered))
            .into_query();

        entity::prelude::Player::find()
            .filter(entity::player::Column::Id.in_subquery(member_ids))
            .filter(entity::player::Column::Status.ne(EntityStatus::Deleted))
            .order_by_asc(entity::player::Column::Nickname)
            .all(self.db)
            .await
    }
}
