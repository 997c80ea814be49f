use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{EntityStatus, Race};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub nickname: String,
    pub race: Option<Race>,
    pub grade_id: Option<i32>,
    pub status: EntityStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::grade::Entity",
        from = "Column::GradeId",
        to = "super::grade::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Grade,
    #[sea_orm(has_many = "super::player_clan::Entity")]
    PlayerClan,
    #[sea_orm(has_many = "super::contest_participant::Entity")]
    ContestParticipant,
}

impl Related<super::grade::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grade.def()
    }
}

impl Related<super::player_clan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerClan.def()
    }
}

impl Related<super::contest::Entity> for Entity {
    fn to() -> RelationDef {
        super::contest_participant::Relation::Contest.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::contest_participant::Relation::Player.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
