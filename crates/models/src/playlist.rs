use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{playlist_song, playlist_user, song, user};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "playlist")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    PlaylistSong,
    PlaylistUser,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::PlaylistSong => Entity::has_many(playlist_song::Entity).into(),
            Relation::PlaylistUser => Entity::has_many(playlist_user::Entity).into(),
        }
    }
}

impl Related<playlist_song::Entity> for Entity {
    fn to() -> RelationDef { Relation::PlaylistSong.def() }
}

impl Related<playlist_user::Entity> for Entity {
    fn to() -> RelationDef { Relation::PlaylistUser.def() }
}

impl Related<song::Entity> for Entity {
    fn to() -> RelationDef { playlist_song::Relation::Song.def() }

    fn via() -> Option<RelationDef> { Some(playlist_song::Relation::Playlist.def().rev()) }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { playlist_user::Relation::User.def() }

    fn via() -> Option<RelationDef> { Some(playlist_user::Relation::Playlist.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}
