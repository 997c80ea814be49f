use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::EntityStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub status: EntityStatus,
    pub started_at: DateTimeUtc,
    pub ended_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_match::Entity")]
    GameMatch,
    #[sea_orm(has_many = "super::contest_participant::Entity")]
    ContestParticipant,
}

impl Related<super::game_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameMatch.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        super::contest_participant::Relation::Player.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::contest_participant::Relation::Contest.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
