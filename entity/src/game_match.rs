use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{EntityStatus, Race};

/// A single game between two players.
///
/// `winner_id` and `loser_id` are either both unset or the two participants in some order.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_one_id: i32,
    pub player_two_id: i32,
    pub player_one_race: Option<Race>,
    pub player_two_race: Option<Race>,
    pub winner_id: Option<i32>,
    pub loser_id: Option<i32>,
    pub map_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub streaming_url: Option<String>,
    pub contest_id: Option<i32>,
    pub match_time: Option<DateTimeUtc>,
    pub status: EntityStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerOneId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PlayerOne,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerTwoId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PlayerTwo,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::WinnerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Winner,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::LoserId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Loser,
    #[sea_orm(
        belongs_to = "super::contest::Entity",
        from = "Column::ContestId",
        to = "super::contest::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Contest,
}

impl Related<super::contest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
