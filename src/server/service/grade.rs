use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::grade::GradeRepository,
    error::AppError,
    model::{
        grade::{CreateGradeParams, Grade, GradeDetail, GradeSort, UpdateGradeParams},
        page::{Page, PageRequest, SortDirection},
    },
};

const DEFAULT_SORT: [(GradeSort, SortDirection); 1] = [(GradeSort::Id, SortDirection::Desc)];

pub struct GradeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GradeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new grade
    ///
    /// Fails with `BadRequest` if the name is already taken.
    pub async fn create(&self, params: CreateGradeParams) -> Result<GradeDetail, AppError> {
        let repo = GradeRepository::new(self.db);

        self.ensure_name_available(&params.name, None).await?;

        let name = params.name.clone();
        let grade = repo
            .create(params)
            .await
            .map_err(|e| name_taken(e, &name))?;
        tracing::info!(grade_id = grade.id, name = %grade.name, "Created grade");

        Ok(GradeDetail {
            grade: Grade::from_entity(grade),
            player_count: 0,
        })
    }

    /// Gets a grade with the number of players holding it
    pub async fn get_by_id(&self, id: i32) -> Result<GradeDetail, AppError> {
        let repo = GradeRepository::new(self.db);

        let grade = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Grade", id))?;
        let player_count = repo.count_players(id).await?;

        Ok(GradeDetail {
            grade: Grade::from_entity(grade),
            player_count,
        })
    }

    /// Gets a page of grades, newest first unless another sort is requested
    pub async fn get_paginated(
        &self,
        include_deleted: bool,
        request: &PageRequest,
    ) -> Result<Page<Grade>, AppError> {
        let repo = GradeRepository::new(self.db);
        let sort = request.resolve_sort(&DEFAULT_SORT)?;

        let (grades, total) = repo
            .get_paginated(include_deleted, &sort, request.page, request.size)
            .await?;

        Ok(Page::new(
            grades.into_iter().map(Grade::from_entity).collect(),
            total,
            request,
        ))
    }

    /// Updates a grade
    ///
    /// Renaming to a name held by another grade fails with `BadRequest`.
    pub async fn update(&self, params: UpdateGradeParams) -> Result<GradeDetail, AppError> {
        let repo = GradeRepository::new(self.db);
        let id = params.id;

        if let Some(name) = &params.name {
            self.ensure_name_available(name, Some(id)).await?;
        }

        let name = params.name.clone();
        repo.update(params)
            .await
            .map_err(|e| match &name {
                Some(name) => name_taken(e, name),
                None => e.into(),
            })?
            .ok_or_else(|| AppError::not_found("Grade", id))?;
        tracing::info!(grade_id = id, "Updated grade");

        self.get_by_id(id).await
    }

    /// Soft deletes a grade
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = GradeRepository::new(self.db);

        repo.soft_delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Grade", id))?;
        tracing::info!(grade_id = id, "Deleted grade");

        Ok(())
    }

    async fn ensure_name_available(&self, name: &str, own_id: Option<i32>) -> Result<(), AppError> {
        let repo = GradeRepository::new(self.db);

        match repo.find_by_name(name).await? {
            Some(existing) if Some(existing.id) != own_id => {
                tracing::warn!(name = %name, "Rejected duplicate grade name");
                Err(AppError::BadRequest(format!(
                    "Grade name already exists: {}",
                    name
                )))
            }
            _ => Ok(()),
        }
    }
}

fn name_taken(err: DbErr, name: &str) -> AppError {
    AppError::unique_violation(err, || format!("Grade name already exists: {}", name))
}
