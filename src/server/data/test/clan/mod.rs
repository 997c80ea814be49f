use crate::server::{
    data::clan::ClanRepository,
    model::{
        clan::{ClanSort, CreateClanParams, UpdateClanParams},
        page::SortDirection,
    },
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::EntityStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod member_counts;
mod members;
mod update;
