use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::EntityStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub founding_date: Date,
    pub closing_date: Option<Date>,
    pub status: EntityStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_clan::Entity")]
    PlayerClan,
}

impl Related<super::player_clan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerClan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
