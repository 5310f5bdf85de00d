use chrono::NaiveDate;
use models::artist;
use sea_orm::{ActiveValue, NotSet, Set};
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::kind::{missing, CatalogKind};
use crate::catalog::seaorm::SeaOrmKind;
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateArtist {
    pub name: String,
    pub starting_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateArtist {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub starting_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct ArtistChanges {
    pub name: Option<String>,
    pub starting_date: Option<NaiveDate>,
}

pub struct ArtistKind;

impl CatalogKind for ArtistKind {
    const LABEL: &'static str = "artist";
    const KEY_FIELD: &'static str = "name";

    type Record = artist::Model;
    type Create = CreateArtist;
    type Update = UpdateArtist;
    type Changes = ArtistChanges;

    fn id(record: &artist::Model) -> Uuid { record.id }
    fn key(record: &artist::Model) -> &str { &record.name }
    fn create_key(input: &CreateArtist) -> &str { &input.name }
    fn take_key(input: &mut UpdateArtist) -> Option<String> { input.name.take() }

    fn insert_changes(input: CreateArtist) -> Result<ArtistChanges, ServiceError> {
        Ok(ArtistChanges { name: Some(input.name), starting_date: Some(input.starting_date) })
    }

    fn update_changes(input: UpdateArtist, key: String) -> Result<ArtistChanges, ServiceError> {
        Ok(ArtistChanges { name: Some(key), starting_date: input.starting_date })
    }

    fn build(id: Uuid, changes: ArtistChanges) -> Result<artist::Model, ServiceError> {
        Ok(artist::Model {
            id,
            name: changes.name.ok_or_else(|| missing("name"))?,
            starting_date: changes.starting_date.ok_or_else(|| missing("starting_date"))?,
        })
    }

    fn apply(record: &mut artist::Model, changes: ArtistChanges) {
        if let Some(name) = changes.name {
            record.name = name;
        }
        if let Some(date) = changes.starting_date {
            record.starting_date = date;
        }
    }
}

impl SeaOrmKind for ArtistKind {
    type Entity = artist::Entity;
    type ActiveModel = artist::ActiveModel;

    fn id_column() -> artist::Column { artist::Column::Id }
    fn key_column() -> artist::Column { artist::Column::Name }

    fn active_model(id: ActiveValue<Uuid>, changes: ArtistChanges) -> artist::ActiveModel {
        artist::ActiveModel {
            id,
            name: changes.name.map_or(NotSet, Set),
            starting_date: changes.starting_date.map_or(NotSet, Set),
        }
    }
}
