pub use sea_orm_migration::prelude::*;

mod m20251019_000001_create_grade_table;
mod m20251019_000002_create_clan_table;
mod m20251019_000003_create_player_table;
mod m20251019_000004_create_player_clan_table;
mod m20251019_000005_create_contest_table;
mod m20251019_000006_create_contest_participant_table;
mod m20251019_000007_create_match_table;
mod m20251019_000008_create_notice_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251019_000001_create_grade_table::Migration),
            Box::new(m20251019_000002_create_clan_table::Migration),
            Box::new(m20251019_000003_create_player_table::Migration),
            Box::new(m20251019_000004_create_player_clan_table::Migration),
            Box::new(m20251019_000005_create_contest_table::Migration),
            Box::new(m20251019_000006_create_contest_participant_table::Migration),
            Box::new(m20251019_000007_create_match_table::Migration),
            Box::new(m20251019_000008_create_notice_table::Migration),
        ]
    }
}
