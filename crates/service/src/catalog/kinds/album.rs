use models::album;
use sea_orm::{ActiveValue, NotSet, Set};
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::kind::{missing, nullable, CatalogKind};
use crate::catalog::seaorm::SeaOrmKind;
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlbum {
    pub name: String,
    #[serde(default)]
    pub artist_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAlbum {
    #[serde(default)]
    pub name: Option<String>,
    /// Absent leaves the link alone; `null` detaches the album.
    #[serde(default, deserialize_with = "nullable")]
    pub artist_id: Option<Option<Uuid>>,
}

#[derive(Debug, Clone, Default)]
pub struct AlbumChanges {
    pub name: Option<String>,
    pub artist_id: Option<Option<Uuid>>,
}

pub struct AlbumKind;

impl CatalogKind for AlbumKind {
    const LABEL: &'static str = "album";
    const KEY_FIELD: &'static str = "name";

    type Record = album::Model;
    type Create = CreateAlbum;
    type Update = UpdateAlbum;
    type Changes = AlbumChanges;

    fn id(record: &album::Model) -> Uuid { record.id }
    fn key(record: &album::Model) -> &str { &record.name }
    fn create_key(input: &CreateAlbum) -> &str { &input.name }
    fn take_key(input: &mut UpdateAlbum) -> Option<String> { input.name.take() }

    fn insert_changes(input: CreateAlbum) -> Result<AlbumChanges, ServiceError> {
        Ok(AlbumChanges { name: Some(input.name), artist_id: Some(input.artist_id) })
    }

    fn update_changes(input: UpdateAlbum, key: String) -> Result<AlbumChanges, ServiceError> {
        Ok(AlbumChanges { name: Some(key), artist_id: input.artist_id })
    }

    fn build(id: Uuid, changes: AlbumChanges) -> Result<album::Model, ServiceError> {
        Ok(album::Model { id, name: changes.name.ok_or_else(|| missing("name"))?, artist_id: changes.artist_id.flatten() })
    }

    fn apply(record: &mut album::Model, changes: AlbumChanges) {
        if let Some(name) = changes.name {
            record.name = name;
        }
        if let Some(artist_id) = changes.artist_id {
            record.artist_id = artist_id;
        }
    }
}

impl SeaOrmKind for AlbumKind {
    type Entity = album::Entity;
    type ActiveModel = album::ActiveModel;

    fn id_column() -> album::Column { album::Column::Id }
    fn key_column() -> album::Column { album::Column::Name }

    fn active_model(id: ActiveValue<Uuid>, changes: AlbumChanges) -> album::ActiveModel {
        album::ActiveModel {
            id,
            name: changes.name.map_or(NotSet, Set),
            artist_id: changes.artist_id.map_or(NotSet, Set),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_null_artist_differs_from_absent() {
        let absent: UpdateAlbum = serde_json::from_str(r#"{"name":"Bleach"}"#).unwrap();
        assert_eq!(absent.artist_id, None);

        let null: UpdateAlbum = serde_json::from_str(r#"{"name":"Bleach","artist_id":null}"#).unwrap();
        assert_eq!(null.artist_id, Some(None));

        let id = Uuid::new_v4();
        let set: UpdateAlbum = serde_json::from_str(&format!(r#"{{"artist_id":"{}"}}"#, id)).unwrap();
        assert_eq!(set.artist_id, Some(Some(id)));
    }
}
