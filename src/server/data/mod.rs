//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each domain
//! in the application. Repositories use SeaORM entity models and return `DbErr`; converting
//! rows to domain models and mapping missing rows to HTTP errors happens in the service layer.
//! Deletes are soft: rows move to `DELETED` and are never removed.

pub mod clan;
pub mod contest;
pub mod game_match;
pub mod grade;
pub mod like;
pub mod notice;
pub mod player;
pub mod player_clan;
