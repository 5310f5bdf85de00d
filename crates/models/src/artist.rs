use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{album, song};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artist")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub starting_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Album,
    Song,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Album => Entity::has_many(album::Entity).into(),
            Relation::Song => Entity::has_many(song::Entity).into(),
        }
    }
}

impl Related<album::Entity> for Entity {
    fn to() -> RelationDef { Relation::Album.def() }
}

impl Related<song::Entity> for Entity {
    fn to() -> RelationDef { Relation::Song.def() }
}

impl ActiveModelBehavior for ActiveModel {}
