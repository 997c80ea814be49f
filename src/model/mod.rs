//! Wire DTOs exchanged with API clients.
//!
//! Every DTO serializes with camelCase field names. Request DTOs derive `Validate` and are
//! checked by the controllers before being converted into server-side parameter types.

pub mod api;
pub mod clan;
pub mod contest;
pub mod dashboard;
pub mod game_match;
pub mod grade;
pub mod notice;
pub mod player;
