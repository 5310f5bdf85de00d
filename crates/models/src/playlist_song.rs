use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{playlist, song};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "playlist_song")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub playlist_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub song_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Playlist,
    Song,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Playlist => Entity::belongs_to(playlist::Entity)
                .from(Column::PlaylistId)
                .to(playlist::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Song => Entity::belongs_to(song::Entity)
                .from(Column::SongId)
                .to(song::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<playlist::Entity> for Entity {
    fn to() -> RelationDef { Relation::Playlist.def() }
}

impl Related<song::Entity> for Entity {
    fn to() -> RelationDef { Relation::Song.def() }
}

impl ActiveModelBehavior for ActiveModel {}
