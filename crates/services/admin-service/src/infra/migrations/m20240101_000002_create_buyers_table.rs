//! Migration: Create buyers table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Buyers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Buyers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Buyers::Name).string().not_null())
                    .col(ColumnDef::new(Buyers::Email).string().not_null().unique_key())
                    .col(
                        ColumnDef::new(Buyers::Suspended)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Buyers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Buyers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Buyers {
    Table,
    Id,
    Name,
    Email,
    Suspended,
    CreatedAt,
}
