pub use super::clan::Entity as Clan;
pub use super::contest::Entity as Contest;
pub use super::contest_participant::Entity as ContestParticipant;
pub use super::game_match::Entity as GameMatch;
pub use super::grade::Entity as Grade;
pub use super::notice::Entity as Notice;
pub use super::player::Entity as Player;
pub use super::player_clan::Entity as PlayerClan;
pub use super::sea_orm_active_enums::{EntityStatus, NoticeType, Race};
