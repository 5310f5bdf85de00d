//! Create `playlist_user` join table (many-to-many playlist <-> user).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlaylistUser::Table)
                    .if_not_exists()
                    .col(uuid(PlaylistUser::PlaylistId))
                    .col(uuid(PlaylistUser::UserId))
                    .primary_key(
                        Index::create()
                            .name("pk_playlist_user")
                            .col(PlaylistUser::PlaylistId)
                            .col(PlaylistUser::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_user_playlist")
                            .from(PlaylistUser::Table, PlaylistUser::PlaylistId)
                            .to(Playlist::Table, Playlist::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_user_user")
                            .from(PlaylistUser::Table, PlaylistUser::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PlaylistUser::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PlaylistUser { Table, PlaylistId, UserId }

#[derive(DeriveIden)]
enum Playlist { Table, Id }

#[derive(DeriveIden)]
enum User { Table, Id }
