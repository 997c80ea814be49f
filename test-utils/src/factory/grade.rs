//! Grade factory for creating test grade entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::EntityStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test grades with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let grade = GradeFactory::new(&db).name("A").build().await?;
/// ```
pub struct GradeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    status: EntityStatus,
}

impl<'a> GradeFactory<'a> {
    /// Creates a new GradeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Grade {id}"` where id is auto-incremented
    /// - description: `None`
    /// - status: `Registered`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Grade {}", id),
            description: None,
            status: EntityStatus::Registered,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn status(mut self, status: EntityStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the grade entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::grade::Model)` - Created grade entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::grade::Model, DbErr> {
        let now = Utc::now();
        let deleted_at = (self.status == EntityStatus::Deleted).then_some(now);

        entity::grade::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(deleted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a registered grade with a unique name.
pub async fn create_grade(db: &DatabaseConnection) -> Result<entity::grade::Model, DbErr> {
    GradeFactory::new(db).build().await
}
