//! Soft-delete bookkeeping shared by every status-bearing table.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::EntityStatus;

/// Computes `deleted_at` for a row moving to `status`.
///
/// Moving to `Deleted` keeps an existing deletion time or stamps `now`; any other status
/// clears it, which restores a soft-deleted row.
pub fn deleted_at_for(
    status: EntityStatus,
    current: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match status {
        EntityStatus::Deleted => current.or(Some(now)),
        _ => None,
    }
}
