use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Album: lookups by artist
        manager
            .create_index(
                Index::create()
                    .name("idx_album_artist")
                    .table(Album::Table)
                    .col(Album::ArtistId)
                    .to_owned(),
            )
            .await?;

        // Song: lookups by artist and by album
        manager
            .create_index(
                Index::create()
                    .name("idx_song_artist")
                    .table(Song::Table)
                    .col(Song::ArtistId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_song_album")
                    .table(Song::Table)
                    .col(Song::AlbumId)
                    .to_owned(),
            )
            .await?;

        // Join tables: reverse direction of the composite primary keys
        manager
            .create_index(
                Index::create()
                    .name("idx_playlist_song_song")
                    .table(PlaylistSong::Table)
                    .col(PlaylistSong::SongId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_playlist_user_user")
                    .table(PlaylistUser::Table)
                    .col(PlaylistUser::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_album_artist").table(Album::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_song_artist").table(Song::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_song_album").table(Song::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_playlist_song_song").table(PlaylistSong::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_playlist_user_user").table(PlaylistUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Album { Table, ArtistId }

#[derive(DeriveIden)]
enum Song { Table, ArtistId, AlbumId }

#[derive(DeriveIden)]
enum PlaylistSong { Table, SongId }

#[derive(DeriveIden)]
enum PlaylistUser { Table, UserId }
