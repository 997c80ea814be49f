use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251019_000002_create_clan_table::Clan, m20251019_000003_create_player_table::Player,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerClan::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerClan::Id))
                    .col(integer(PlayerClan::PlayerId))
                    .col(integer(PlayerClan::ClanId))
                    .col(string(PlayerClan::Status).default("REGISTERED"))
                    .col(timestamp_with_time_zone(PlayerClan::JoinedAt))
                    .col(timestamp_with_time_zone_null(PlayerClan::ExitedAt))
                    .col(
                        timestamp_with_time_zone(PlayerClan::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(PlayerClan::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(PlayerClan::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_clan_player_id")
                            .from(PlayerClan::Table, PlayerClan::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_clan_clan_id")
                            .from(PlayerClan::Table, PlayerClan::ClanId)
                            .to(Clan::Table, Clan::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_clan_player_status")
                    .table(PlayerClan::Table)
                    .col(PlayerClan::PlayerId)
                    .col(PlayerClan::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerClan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerClan {
    #[sea_orm(iden = "player_clans")]
    Table,
    Id,
    PlayerId,
    ClanId,
    Status,
    JoinedAt,
    ExitedAt,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
