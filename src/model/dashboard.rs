use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::game_match::MatchSummaryDto;

/// Landing page aggregate: live counts and the most recent matches.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub clan_count: u64,
    pub member_count: u64,
    pub match_count: u64,
    pub latest_matches: Vec<MatchSummaryDto>,
}
