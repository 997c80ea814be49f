//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// `DatabaseConnection` is a connection pool, so clones share the same pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Page size applied when a listing request omits `size`.
    pub default_page_size: u64,
}

impl AppState {
    pub fn new(db: DatabaseConnection, default_page_size: u64) -> Self {
        Self {
            db,
            default_page_size,
        }
    }
}
