//! Create `artist` table.
//!
//! `name` carries the unique index that backs the service-level duplicate check.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Artist::Table)
                    .if_not_exists()
                    .col(uuid(Artist::Id).primary_key())
                    .col(string(Artist::Name).unique_key().not_null())
                    .col(date(Artist::StartingDate).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Artist::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Artist { Table, Id, Name, StartingDate }
