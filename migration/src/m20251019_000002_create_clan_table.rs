use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clan::Table)
                    .if_not_exists()
                    .col(pk_auto(Clan::Id))
                    .col(string_uniq(Clan::Name))
                    .col(text_null(Clan::Description))
                    .col(date(Clan::FoundingDate))
                    .col(date_null(Clan::ClosingDate))
                    .col(string(Clan::Status).default("REGISTERED"))
                    .col(
                        timestamp_with_time_zone(Clan::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Clan::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Clan::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Clan {
    #[sea_orm(iden = "clans")]
    Table,
    Id,
    Name,
    Description,
    FoundingDate,
    ClosingDate,
    Status,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
