use models::song;
use sea_orm::{ActiveValue, NotSet, Set};
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::kind::{missing, nullable, CatalogKind};
use crate::catalog::seaorm::SeaOrmKind;
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSong {
    pub name: String,
    #[serde(default)]
    pub artist_id: Option<Uuid>,
    #[serde(default)]
    pub album_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSong {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub artist_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "nullable")]
    pub album_id: Option<Option<Uuid>>,
}

#[derive(Debug, Clone, Default)]
pub struct SongChanges {
    pub name: Option<String>,
    pub artist_id: Option<Option<Uuid>>,
    pub album_id: Option<Option<Uuid>>,
}

pub struct SongKind;

impl CatalogKind for SongKind {
    const LABEL: &'static str = "song";
    const KEY_FIELD: &'static str = "name";

    type Record = song::Model;
    type Create = CreateSong;
    type Update = UpdateSong;
    type Changes = SongChanges;

    fn id(record: &song::Model) -> Uuid { record.id }
    fn key(record: &song::Model) -> &str { &record.name }
    fn create_key(input: &CreateSong) -> &str { &input.name }
    fn take_key(input: &mut UpdateSong) -> Option<String> { input.name.take() }

    fn insert_changes(input: CreateSong) -> Result<SongChanges, ServiceError> {
        Ok(SongChanges { name: Some(input.name), artist_id: Some(input.artist_id), album_id: Some(input.album_id) })
    }

    fn update_changes(input: UpdateSong, key: String) -> Result<SongChanges, ServiceError> {
        Ok(SongChanges { name: Some(key), artist_id: input.artist_id, album_id: input.album_id })
    }

    fn build(id: Uuid, changes: SongChanges) -> Result<song::Model, ServiceError> {
        Ok(song::Model {
            id,
            name: changes.name.ok_or_else(|| missing("name"))?,
            artist_id: changes.artist_id.flatten(),
            album_id: changes.album_id.flatten(),
        })
    }

    fn apply(record: &mut song::Model, changes: SongChanges) {
        if let Some(name) = changes.name {
            record.name = name;
        }
        if let Some(artist_id) = changes.artist_id {
            record.artist_id = artist_id;
        }
        if let Some(album_id) = changes.album_id {
            record.album_id = album_id;
        }
    }
}

impl SeaOrmKind for SongKind {
    type Entity = song::Entity;
    type ActiveModel = song::ActiveModel;

    fn id_column() -> song::Column { song::Column::Id }
    fn key_column() -> song::Column { song::Column::Name }

    fn active_model(id: ActiveValue<Uuid>, changes: SongChanges) -> song::ActiveModel {
        song::ActiveModel {
            id,
            name: changes.name.map_or(NotSet, Set),
            artist_id: changes.artist_id.map_or(NotSet, Set),
            album_id: changes.album_id.map_or(NotSet, Set),
        }
    }
}
