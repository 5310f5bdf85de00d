use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{playlist, playlist_user};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    /// Argon2 PHC string; kept out of every JSON response.
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    PlaylistUser,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::PlaylistUser => Entity::has_many(playlist_user::Entity).into(),
        }
    }
}

impl Related<playlist_user::Entity> for Entity {
    fn to() -> RelationDef { Relation::PlaylistUser.def() }
}

impl Related<playlist::Entity> for Entity {
    fn to() -> RelationDef { playlist_user::Relation::Playlist.def() }

    fn via() -> Option<RelationDef> { Some(playlist_user::Relation::User.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}
