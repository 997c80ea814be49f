use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notice::Table)
                    .if_not_exists()
                    .col(pk_auto(Notice::Id))
                    .col(string(Notice::Title))
                    .col(text(Notice::Text))
                    .col(string(Notice::Writer))
                    .col(string(Notice::NoticeType).default("ADMIN"))
                    .col(string(Notice::Status).default("REGISTERED"))
                    .col(
                        timestamp_with_time_zone(Notice::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Notice::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Notice::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Notice {
    #[sea_orm(iden = "notices")]
    Table,
    Id,
    Title,
    Text,
    Writer,
    NoticeType,
    Status,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
