use crate::server::{
    data::game_match::GameMatchRepository,
    model::{
        game_match::{CreateMatchParams, MatchSearchFilter, MatchSort, UpdateMatchParams},
        page::SortDirection,
        player::PlayerMatchFilter,
    },
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{EntityStatus, Race};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod for_player;
mod latest;
mod opponent_stats;
mod search;
mod update;
