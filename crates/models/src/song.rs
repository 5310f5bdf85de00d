use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{album, artist, playlist, playlist_song};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "song")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub artist_id: Option<Uuid>,
    pub album_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Artist,
    Album,
    PlaylistSong,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Artist => Entity::belongs_to(artist::Entity)
                .from(Column::ArtistId)
                .to(artist::Column::Id)
                .on_delete(ForeignKeyAction::SetNull)
                .into(),
            Relation::Album => Entity::belongs_to(album::Entity)
                .from(Column::AlbumId)
                .to(album::Column::Id)
                .on_delete(ForeignKeyAction::SetNull)
                .into(),
            Relation::PlaylistSong => Entity::has_many(playlist_song::Entity).into(),
        }
    }
}

impl Related<artist::Entity> for Entity {
    fn to() -> RelationDef { Relation::Artist.def() }
}

impl Related<album::Entity> for Entity {
    fn to() -> RelationDef { Relation::Album.def() }
}

impl Related<playlist_song::Entity> for Entity {
    fn to() -> RelationDef { Relation::PlaylistSong.def() }
}

impl Related<playlist::Entity> for Entity {
    fn to() -> RelationDef { playlist_song::Relation::Playlist.def() }

    fn via() -> Option<RelationDef> { Some(playlist_song::Relation::Song.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}
