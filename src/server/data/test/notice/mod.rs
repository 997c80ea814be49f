use crate::server::{
    data::notice::NoticeRepository,
    model::notice::{CreateNoticeParams, UpdateNoticeParams},
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{EntityStatus, NoticeType};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
