//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories only insert the row
//! they describe; callers create referenced rows first.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let grade = factory::create_grade(&db).await?;
//! let player = factory::player::PlayerFactory::new(&db)
//!     .nickname("Flash")
//!     .grade_id(Some(grade.id))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `grade` - Create grade entities
//! - `clan` - Create clan entities
//! - `player` - Create player entities
//! - `player_clan` - Create clan membership entities
//! - `contest` - Create contest entities
//! - `contest_participant` - Create contest participation entities
//! - `game_match` - Create match entities
//! - `notice` - Create notice entities
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod clan;
pub mod contest;
pub mod contest_participant;
pub mod game_match;
pub mod grade;
pub mod helpers;
pub mod notice;
pub mod player;
pub mod player_clan;

pub use clan::create_clan;
pub use contest::create_contest;
pub use contest_participant::create_contest_participant;
pub use game_match::create_match;
pub use grade::create_grade;
pub use notice::create_notice;
pub use player::create_player;
pub use player_clan::create_player_clan;
