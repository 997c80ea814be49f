use crate::server::{
    data::contest::ContestRepository,
    model::{
        contest::{ContestSort, CreateContestParams, UpdateContestParams},
        page::SortDirection,
    },
};
use chrono::Utc;
use entity::sea_orm_active_enums::EntityStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
mod participants;
mod update;
