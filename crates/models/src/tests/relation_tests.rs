use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set};
use uuid::Uuid;

use super::setup_test_db;
use crate::{album, artist, playlist, playlist_song, song};

async fn seed_artist(db: &sea_orm::DatabaseConnection, name: &str) -> Result<artist::Model> {
    Ok(artist::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.into()),
        starting_date: Set(NaiveDate::from_ymd_opt(1990, 5, 1).unwrap()),
    }
    .insert(db)
    .await?)
}

#[tokio::test]
async fn test_artist_albums_and_songs_are_related() -> Result<()> {
    let db = setup_test_db().await?;
    let a = seed_artist(&db, "Pixies").await?;

    let al = album::ActiveModel { id: Set(Uuid::new_v4()), name: Set("Doolittle".into()), artist_id: Set(Some(a.id)) }
        .insert(&db)
        .await?;
    song::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Debaser".into()),
        artist_id: Set(Some(a.id)),
        album_id: Set(Some(al.id)),
    }
    .insert(&db)
    .await?;

    let albums = a.find_related(album::Entity).all(&db).await?;
    assert_eq!(albums.len(), 1);
    let songs = al.find_related(song::Entity).all(&db).await?;
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0].name, "Debaser");
    Ok(())
}

#[tokio::test]
async fn test_deleting_artist_detaches_children() -> Result<()> {
    let db = setup_test_db().await?;
    let a = seed_artist(&db, "Sonic Youth").await?;
    let al = album::ActiveModel { id: Set(Uuid::new_v4()), name: Set("Daydream Nation".into()), artist_id: Set(Some(a.id)) }
        .insert(&db)
        .await?;

    artist::Entity::delete_by_id(a.id).exec(&db).await?;

    let still_there = album::Entity::find_by_id(al.id).one(&db).await?.expect("album survives");
    assert_eq!(still_there.artist_id, None);
    Ok(())
}

#[tokio::test]
async fn test_playlist_songs_many_to_many() -> Result<()> {
    let db = setup_test_db().await?;
    let p = playlist::ActiveModel { id: Set(Uuid::new_v4()), name: Set("Mix".into()) }.insert(&db).await?;
    let s1 = song::ActiveModel { id: Set(Uuid::new_v4()), name: Set("One".into()), artist_id: Set(None), album_id: Set(None) }
        .insert(&db)
        .await?;
    let s2 = song::ActiveModel { id: Set(Uuid::new_v4()), name: Set("Two".into()), artist_id: Set(None), album_id: Set(None) }
        .insert(&db)
        .await?;
    for s in [&s1, &s2] {
        playlist_song::ActiveModel { playlist_id: Set(p.id), song_id: Set(s.id) }.insert(&db).await?;
    }

    let songs = p.find_related(song::Entity).all(&db).await?;
    assert_eq!(songs.len(), 2);
    let playlists = s1.find_related(playlist::Entity).all(&db).await?;
    assert_eq!(playlists.len(), 1);

    // Deleting a song removes its join rows
    song::Entity::delete_by_id(s1.id).exec(&db).await?;
    let songs = p.find_related(song::Entity).all(&db).await?;
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0].id, s2.id);
    Ok(())
}
