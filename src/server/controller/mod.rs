//! HTTP request handlers.
//!
//! Each module groups the endpoints of one resource. Handlers validate request bodies,
//! convert DTOs into operation parameters, call the matching service and convert the
//! resulting domain models back into DTOs. Every handler is annotated with
//! `#[utoipa::path]` so the router can assemble the OpenAPI document.

pub mod clan;
pub mod contest;
pub mod dashboard;
pub mod game_match;
pub mod grade;
pub mod health;
pub mod notice;
pub mod player;

#[cfg(test)]
mod test;

use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{error::AppError, model::page::PageRequest, state::AppState};

/// Paging and deletion visibility accepted by the plain resource listings.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Zero-based page index (default: 0)
    pub page: Option<u64>,
    /// Page size (default: configured page size, max 100)
    pub size: Option<u64>,
    /// Sort instructions, e.g. `name,asc;createdAt,desc`
    pub sort: Option<String>,
    /// Include soft-deleted rows (default: false)
    #[serde(default)]
    pub include_deleted: bool,
}

/// Builds a page request from raw query values using the configured default size.
pub(crate) fn page_request(
    state: &AppState,
    page: Option<u64>,
    size: Option<u64>,
    sort: Option<&str>,
) -> Result<PageRequest, AppError> {
    PageRequest::new(page, size, sort, state.default_page_size)
}
