//! Create `album` table with a nullable FK to `artist`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Album::Table)
                    .if_not_exists()
                    .col(uuid(Album::Id).primary_key())
                    .col(string(Album::Name).unique_key().not_null())
                    .col(uuid_null(Album::ArtistId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_album_artist")
                            .from(Album::Table, Album::ArtistId)
                            .to(Artist::Table, Artist::Id)
                            // Deleting an artist detaches its albums instead of removing them
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Album::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Album { Table, Id, Name, ArtistId }

#[derive(DeriveIden)]
enum Artist { Table, Id }
