use crate::server::{error::AppError, model::page::PageRequest};
use entity::sea_orm_active_enums::{EntityStatus, Race};
use test_utils::{builder::TestBuilder, factory};


fn first_page() -> PageRequest {
    PageRequest {
        page: 0,
        size: 20,
        sort: Vec::new(),
    }
}
