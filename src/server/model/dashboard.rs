use crate::{model::dashboard::DashboardDto, server::model::game_match::Match};

/// Counts of live clans, players and matches plus the latest matches.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub clan_count: u64,
    pub member_count: u64,
    pub match_count: u64,
    pub latest_matches: Vec<Match>,
}

impl Dashboard {
    pub fn into_dto(self) -> DashboardDto {
        DashboardDto {
            clan_count: self.clan_count,
            member_count: self.member_count,
            match_count: self.match_count,
            latest_matches: self
                .latest_matches
                .into_iter()
                .map(Match::into_summary_dto)
                .collect(),
        }
    }
}
