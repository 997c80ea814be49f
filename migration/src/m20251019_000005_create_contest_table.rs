use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contest::Table)
                    .if_not_exists()
                    .col(pk_auto(Contest::Id))
                    .col(string(Contest::Name))
                    .col(text_null(Contest::Description))
                    .col(string(Contest::Status).default("REGISTERED"))
                    .col(timestamp_with_time_zone(Contest::StartedAt))
                    .col(timestamp_with_time_zone_null(Contest::EndedAt))
                    .col(
                        timestamp_with_time_zone(Contest::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Contest::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Contest::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Contest {
    #[sea_orm(iden = "contests")]
    Table,
    Id,
    Name,
    Description,
    Status,
    StartedAt,
    EndedAt,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
