use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Grade, Player};
///
/// let test = TestBuilder::new()
///     .with_table(Grade)
///     .with_table(Player)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign keys
    /// after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the player and clan membership tables.
    ///
    /// Covers player, clan and grade CRUD. Profiles and stats also read matches, so those
    /// tests need `with_match_tables()`.
    ///
    /// Adds, in dependency order:
    /// - Grade
    /// - Clan
    /// - Player
    /// - PlayerClan
    pub fn with_player_tables(self) -> Self {
        self.with_table(Grade)
            .with_table(Clan)
            .with_table(Player)
            .with_table(PlayerClan)
    }

    /// Adds all tables required for match operations.
    ///
    /// Equivalent to `with_player_tables()` followed by Contest, ContestParticipant and
    /// GameMatch.
    pub fn with_match_tables(self) -> Self {
        self.with_player_tables()
            .with_table(Contest)
            .with_table(ContestParticipant)
            .with_table(GameMatch)
    }

    /// Adds every table in the schema, including notices.
    pub fn with_all_tables(self) -> Self {
        self.with_match_tables().with_table(Notice)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
