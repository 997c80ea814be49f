use sea_orm::DatabaseConnection;

use crate::server::{
    data::{clan::ClanRepository, game_match::GameMatchRepository, player::PlayerRepository},
    error::AppError,
    model::dashboard::Dashboard,
    service::game_match::assemble_matches,
};

/// Number of recent matches shown on the dashboard.
pub const LATEST_MATCH_LIMIT: u64 = 10;

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gathers community totals and the latest registered matches
    pub async fn get(&self) -> Result<Dashboard, AppError> {
        let match_repo = GameMatchRepository::new(self.db);

        let clan_count = ClanRepository::new(self.db).count_registered().await?;
        let member_count = PlayerRepository::new(self.db).count_registered().await?;
        let match_count = match_repo.count_registered().await?;
        let latest = match_repo.latest(LATEST_MATCH_LIMIT).await?;

        Ok(Dashboard {
            clan_count,
            member_count,
            match_count,
            latest_matches: assemble_matches(self.db, latest).await?,
        })
    }
}
