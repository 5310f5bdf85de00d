//! Membership of songs and users in playlists, stored in the `playlist_song` and
//! `playlist_user` join tables. Storage errors go through `From<DbErr>`, so a
//! duplicate join row is a conflict on every path.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set};
use tracing::{info, instrument};
use uuid::Uuid;

use models::{playlist, playlist_song, playlist_user, song, user};
use crate::errors::ServiceError;

async fn require_playlist(db: &DatabaseConnection, id: Uuid) -> Result<playlist::Model, ServiceError> {
    playlist::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("playlist", id))
}

/// Songs linked to a playlist.
#[instrument(skip(db))]
pub async fn list_songs(db: &DatabaseConnection, playlist_id: Uuid) -> Result<Vec<song::Model>, ServiceError> {
    let playlist = require_playlist(db, playlist_id).await?;
    Ok(playlist.find_related(song::Entity).all(db).await?)
}

/// Link a song to a playlist.
#[instrument(skip(db))]
pub async fn add_song(db: &DatabaseConnection, playlist_id: Uuid, song_id: Uuid) -> Result<bool, ServiceError> {
    require_playlist(db, playlist_id).await?;
    if song::Entity::find_by_id(song_id).one(db).await?.is_none() {
        return Err(ServiceError::not_found("song", song_id));
    }
    if playlist_song::Entity::find_by_id((playlist_id, song_id)).one(db).await?.is_some() {
        return Err(ServiceError::Conflict(format!("song {} is already in playlist {}", song_id, playlist_id)));
    }

    let link = playlist_song::ActiveModel { playlist_id: Set(playlist_id), song_id: Set(song_id) };
    playlist_song::Entity::insert(link).exec_without_returning(db).await?;
    info!("song_linked");
    Ok(true)
}

/// Unlink a song from a playlist.
#[instrument(skip(db))]
pub async fn remove_song(db: &DatabaseConnection, playlist_id: Uuid, song_id: Uuid) -> Result<bool, ServiceError> {
    require_playlist(db, playlist_id).await?;
    let res = playlist_song::Entity::delete_many()
        .filter(playlist_song::Column::PlaylistId.eq(playlist_id))
        .filter(playlist_song::Column::SongId.eq(song_id))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::NotFound(format!("song {} is not in playlist {}", song_id, playlist_id)));
    }
    info!("song_unlinked");
    Ok(true)
}

/// Users linked to a playlist.
#[instrument(skip(db))]
pub async fn list_users(db: &DatabaseConnection, playlist_id: Uuid) -> Result<Vec<user::Model>, ServiceError> {
    let playlist = require_playlist(db, playlist_id).await?;
    Ok(playlist.find_related(user::Entity).all(db).await?)
}

#[instrument(skip(db))]
pub async fn add_user(db: &DatabaseConnection, playlist_id: Uuid, user_id: Uuid) -> Result<bool, ServiceError> {
    require_playlist(db, playlist_id).await?;
    if user::Entity::find_by_id(user_id).one(db).await?.is_none() {
        return Err(ServiceError::not_found("user", user_id));
    }
    if playlist_user::Entity::find_by_id((playlist_id, user_id)).one(db).await?.is_some() {
        return Err(ServiceError::Conflict(format!("user {} is already in playlist {}", user_id, playlist_id)));
    }

    let link = playlist_user::ActiveModel { playlist_id: Set(playlist_id), user_id: Set(user_id) };
    playlist_user::Entity::insert(link).exec_without_returning(db).await?;
    info!("user_linked");
    Ok(true)
}

#[instrument(skip(db))]
pub async fn remove_user(db: &DatabaseConnection, playlist_id: Uuid, user_id: Uuid) -> Result<bool, ServiceError> {
    require_playlist(db, playlist_id).await?;
    let res = playlist_user::Entity::delete_many()
        .filter(playlist_user::Column::PlaylistId.eq(playlist_id))
        .filter(playlist_user::Column::UserId.eq(user_id))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::NotFound(format!("user {} is not in playlist {}", user_id, playlist_id)));
    }
    info!("user_unlinked");
    Ok(true)
}
