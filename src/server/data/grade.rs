use chrono::Utc;
use entity::sea_orm_active_enums::EntityStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::{
    grade::{CreateGradeParams, GradeSort, UpdateGradeParams},
    page::SortDirection,
    status::deleted_at_for,
};

pub struct GradeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GradeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new registered grade
    pub async fn create(&self, params: CreateGradeParams) -> Result<entity::grade::Model, DbErr> {
        let now = Utc::now();

        entity::grade::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(EntityStatus::Registered),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a grade by ID regardless of status
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::grade::Model>, DbErr> {
        entity::prelude::Grade::find_by_id(id).one(self.db).await
    }

    /// Finds a grade by its exact name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::grade::Model>, DbErr> {
        entity::prelude::Grade::find()
            .filter(entity::grade::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets the grades with the given ids keyed by id
    pub async fn get_many(
        &self,
        ids: &[i32],
    ) -> Result<HashMap<i32, entity::grade::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let grades = entity::prelude::Grade::find()
            .filter(entity::grade::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(grades.into_iter().map(|g| (g.id, g)).collect())
    }

    /// Gets a page of grades
    ///
    /// Soft-deleted grades are skipped unless `include_deleted` is set.
    ///
    /// # Returns
    /// - `Ok((grades, total))` - Grades on the requested page and the total across all pages
    pub async fn get_paginated(
        &self,
        include_deleted: bool,
        sort: &[(GradeSort, SortDirection)],
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::grade::Model>, u64), DbErr> {
        let mut query = entity::prelude::Grade::find();

        if !include_deleted {
            query = query.filter(entity::grade::Column::Status.ne(EntityStatus::Deleted));
        }

        for (field, direction) in sort {
            let column = match field {
                GradeSort::Name => entity::grade::Column::Name,
                GradeSort::CreatedAt => entity::grade::Column::CreatedAt,
                GradeSort::Id => entity::grade::Column::Id,
            };
            query = query.order_by(column, direction.order());
        }

        let paginator = query.paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let grades = paginator.fetch_page(page).await?;

        Ok((grades, total))
    }

    /// Applies the provided fields to a grade
    ///
    /// Returns None if the grade doesn't exist
    pub async fn update(
        &self,
        params: UpdateGradeParams,
    ) -> Result<Option<entity::grade::Model>, DbErr> {
        let Some(grade) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let deleted_at = grade.deleted_at;
        let mut active: entity::grade::ActiveModel = grade.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
            active.deleted_at = ActiveValue::Set(deleted_at_for(status, deleted_at, now));
        }
        active.updated_at = ActiveValue::Set(now);

        active.update(self.db).await.map(Some)
    }

    /// Soft deletes a grade
    ///
    /// Returns None if the grade doesn't exist
    pub async fn soft_delete(&self, id: i32) -> Result<Option<entity::grade::Model>, DbErr> {
        self.update(UpdateGradeParams {
            id,
            name: None,
            description: None,
            status: Some(EntityStatus::Deleted),
        })
        .await
    }

    /// Counts non-deleted players holding the grade
    pub async fn count_players(&self, grade_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::GradeId.eq(grade_id))
            .filter(entity::player::Column::Status.ne(EntityStatus::Deleted))
            .count(self.db)
            .await
    }
}
