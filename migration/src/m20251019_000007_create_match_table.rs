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
                    .table(Match::Table)
                    .if_not_exists()
                    .col(pk_auto(Match::Id))
                    .col(integer(Match::PlayerOneId))
                    .col(integer(Match::PlayerTwoId))
                    .col(string_null(Match::PlayerOneRace))
                    .col(string_null(Match::PlayerTwoRace))
                    .col(integer_null(Match::WinnerId))
                    .col(integer_null(Match::LoserId))
                    .col(string_null(Match::MapName))
                    .col(text_null(Match::Description))
                    .col(string_null(Match::StreamingUrl))
                    .col(integer_null(Match::ContestId))
                    .col(timestamp_with_time_zone_null(Match::MatchTime))
                    .col(string(Match::Status).default("REGISTERED"))
                    .col(
                        timestamp_with_time_zone(Match::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Match::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Match::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_player_one_id")
                            .from(Match::Table, Match::PlayerOneId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_player_two_id")
                            .from(Match::Table, Match::PlayerTwoId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_winner_id")
                            .from(Match::Table, Match::WinnerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_loser_id")
                            .from(Match::Table, Match::LoserId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_contest_id")
                            .from(Match::Table, Match::ContestId)
                            .to(Contest::Table, Contest::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_match_player_one_id")
                    .table(Match::Table)
                    .col(Match::PlayerOneId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_match_player_two_id")
                    .table(Match::Table)
                    .col(Match::PlayerTwoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_match_match_time")
                    .table(Match::Table)
                    .col(Match::MatchTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Match::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Match {
    #[sea_orm(iden = "matches")]
    Table,
    Id,
    PlayerOneId,
    PlayerTwoId,
    PlayerOneRace,
    PlayerTwoRace,
    WinnerId,
    LoserId,
    MapName,
    Description,
    StreamingUrl,
    ContestId,
    MatchTime,
    Status,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
