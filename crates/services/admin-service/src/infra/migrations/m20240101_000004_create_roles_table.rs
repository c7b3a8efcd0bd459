//! Migration: Create roles table and seed the built-in roles.

use sea_orm_migration::prelude::*;

use domain::{ROLE_ADMIN, ROLE_BUYER, ROLE_SELLER};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Roles::Role).string().not_null().primary_key())
                    .col(ColumnDef::new(Roles::Description).string().null())
                    .to_owned(),
            )
            .await?;

        let seed = Query::insert()
            .into_table(Roles::Table)
            .columns([Roles::Role, Roles::Description])
            .values_panic([ROLE_ADMIN.into(), "Marketplace operator".into()])
            .values_panic([ROLE_SELLER.into(), "Lists and sells products".into()])
            .values_panic([ROLE_BUYER.into(), "Browses and purchases products".into()])
            .to_owned();

        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Roles {
    Table,
    Role,
    Description,
}
