use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Grade::Table)
                    .if_not_exists()
                    .col(pk_auto(Grade::Id))
                    .col(string_uniq(Grade::Name))
                    .col(text_null(Grade::Description))
                    .col(string(Grade::Status).default("REGISTERED"))
                    .col(
                        timestamp_with_time_zone(Grade::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Grade::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Grade::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Grade::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Grade {
    #[sea_orm(iden = "grades")]
    Table,
    Id,
    Name,
    Description,
    Status,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
