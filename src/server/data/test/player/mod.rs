use crate::server::{
    data::{player::PlayerRepository, player_clan::PlayerClanRepository},
    model::{
        page::SortDirection,
        player::{CreatePlayerParams, PlayerListFilter, PlayerSort, UpdatePlayerParams},
    },
};
use entity::sea_orm_active_enums::{EntityStatus, Race};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod stats;
mod update;
