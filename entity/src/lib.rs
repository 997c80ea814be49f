//! SeaORM entity models for the clan community database.
//!
//! Each module maps one table. Shared string-backed enums live in
//! [`sea_orm_active_enums`] and are re-exported through [`prelude`].

pub mod prelude;

pub mod clan;
pub mod contest;
pub mod contest_participant;
pub mod game_match;
pub mod grade;
pub mod notice;
pub mod player;
pub mod player_clan;
pub mod sea_orm_active_enums;
