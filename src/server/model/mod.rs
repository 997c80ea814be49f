//! Domain models and operation parameters.
//!
//! Domain models are built from entity models at the service boundary (`from_entity`) and
//! converted to wire DTOs for responses (`into_dto`). Parameter types carry validated request
//! data from controllers into services (`from_dto`).

pub mod clan;
pub mod contest;
pub mod dashboard;
pub mod game_match;
pub mod grade;
pub mod notice;
pub mod page;
pub mod player;
pub mod status;
