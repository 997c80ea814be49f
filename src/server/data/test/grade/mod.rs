use crate::server::{
    data::grade::GradeRepository,
    model::{
        grade::{CreateGradeParams, GradeSort, UpdateGradeParams},
        page::SortDirection,
    },
};
use entity::sea_orm_active_enums::EntityStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_players;
mod create;
mod get_paginated;
mod soft_delete;
mod update;
