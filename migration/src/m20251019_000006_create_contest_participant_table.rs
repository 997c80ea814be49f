use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251019_000003_create_player_table::Player, m20251019_000005_create_contest_table::Contest,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContestParticipant::Table)
                    .if_not_exists()
                    .col(integer(ContestParticipant::ContestId))
                    .col(integer(ContestParticipant::PlayerId))
                    .col(
                        timestamp_with_time_zone(ContestParticipant::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(ContestParticipant::ContestId)
                            .col(ContestParticipant::PlayerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contest_participant_contest_id")
                            .from(ContestParticipant::Table, ContestParticipant::ContestId)
                            .to(Contest::Table, Contest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contest_participant_player_id")
                            .from(ContestParticipant::Table, ContestParticipant::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContestParticipant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ContestParticipant {
    #[sea_orm(iden = "contest_participants")]
    Table,
    ContestId,
    PlayerId,
    CreatedAt,
}
