use sea_orm_migration::{prelude::*, schema::*};

use super::m20251019_000001_create_grade_table::Grade;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string_uniq(Player::Nickname))
                    .col(string_null(Player::Race))
                    .col(integer_null(Player::GradeId))
                    .col(string(Player::Status).default("REGISTERED"))
                    .col(
                        timestamp_with_time_zone(Player::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Player::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Player::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_grade_id")
                            .from(Player::Table, Player::GradeId)
                            .to(Grade::Table, Grade::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    #[sea_orm(iden = "players")]
    Table,
    Id,
    Nickname,
    Race,
    GradeId,
    Status,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
