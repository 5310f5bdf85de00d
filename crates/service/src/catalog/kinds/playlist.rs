use models::playlist;
use sea_orm::{ActiveValue, NotSet, Set};
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::kind::{missing, CatalogKind};
use crate::catalog::seaorm::SeaOrmKind;
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylist {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlaylist {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PlaylistChanges {
    pub name: Option<String>,
}

pub struct PlaylistKind;

impl CatalogKind for PlaylistKind {
    const LABEL: &'static str = "playlist";
    const KEY_FIELD: &'static str = "name";

    type Record = playlist::Model;
    type Create = CreatePlaylist;
    type Update = UpdatePlaylist;
    type Changes = PlaylistChanges;

    fn id(record: &playlist::Model) -> Uuid { record.id }
    fn key(record: &playlist::Model) -> &str { &record.name }
    fn create_key(input: &CreatePlaylist) -> &str { &input.name }
    fn take_key(input: &mut UpdatePlaylist) -> Option<String> { input.name.take() }

    fn insert_changes(input: CreatePlaylist) -> Result<PlaylistChanges, ServiceError> {
        Ok(PlaylistChanges { name: Some(input.name) })
    }

    fn update_changes(_input: UpdatePlaylist, key: String) -> Result<PlaylistChanges, ServiceError> {
        Ok(PlaylistChanges { name: Some(key) })
    }

    fn build(id: Uuid, changes: PlaylistChanges) -> Result<playlist::Model, ServiceError> {
        Ok(playlist::Model { id, name: changes.name.ok_or_else(|| missing("name"))? })
    }

    fn apply(record: &mut playlist::Model, changes: PlaylistChanges) {
        if let Some(name) = changes.name {
            record.name = name;
        }
    }
}

impl SeaOrmKind for PlaylistKind {
    type Entity = playlist::Entity;
    type ActiveModel = playlist::ActiveModel;

    fn id_column() -> playlist::Column { playlist::Column::Id }
    fn key_column() -> playlist::Column { playlist::Column::Name }

    fn active_model(id: ActiveValue<Uuid>, changes: PlaylistChanges) -> playlist::ActiveModel {
        playlist::ActiveModel { id, name: changes.name.map_or(NotSet, Set) }
    }
}
