use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::EntityStatus;

/// Membership interval of a player in a clan.
///
/// An open membership has `status = Registered` and no `exited_at`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player_clans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_id: i32,
    pub clan_id: i32,
    pub status: EntityStatus,
    pub joined_at: DateTimeUtc,
    pub exited_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::clan::Entity",
        from = "Column::ClanId",
        to = "super::clan::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Clan,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::clan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
