//! Create `playlist_song` join table (many-to-many playlist <-> song).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlaylistSong::Table)
                    .if_not_exists()
                    .col(uuid(PlaylistSong::PlaylistId))
                    .col(uuid(PlaylistSong::SongId))
                    .primary_key(
                        Index::create()
                            .name("pk_playlist_song")
                            .col(PlaylistSong::PlaylistId)
                            .col(PlaylistSong::SongId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_song_playlist")
                            .from(PlaylistSong::Table, PlaylistSong::PlaylistId)
                            .to(Playlist::Table, Playlist::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_song_song")
                            .from(PlaylistSong::Table, PlaylistSong::SongId)
                            .to(Song::Table, Song::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PlaylistSong::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PlaylistSong { Table, PlaylistId, SongId }

#[derive(DeriveIden)]
enum Playlist { Table, Id }

#[derive(DeriveIden)]
enum Song { Table, Id }
