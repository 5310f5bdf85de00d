//! Create `song` table with nullable FKs to `artist` and `album`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Song::Table)
                    .if_not_exists()
                    .col(uuid(Song::Id).primary_key())
                    .col(string(Song::Name).unique_key().not_null())
                    .col(uuid_null(Song::ArtistId))
                    .col(uuid_null(Song::AlbumId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_song_artist")
                            .from(Song::Table, Song::ArtistId)
                            .to(Artist::Table, Artist::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_song_album")
                            .from(Song::Table, Song::AlbumId)
                            .to(Album::Table, Album::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Song::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Song { Table, Id, Name, ArtistId, AlbumId }

#[derive(DeriveIden)]
enum Artist { Table, Id }

#[derive(DeriveIden)]
enum Album { Table, Id }
