use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{artist, song};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "album")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub artist_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Artist,
    Song,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Artist => Entity::belongs_to(artist::Entity)
                .from(Column::ArtistId)
                .to(artist::Column::Id)
                .on_delete(ForeignKeyAction::SetNull)
                .into(),
            Relation::Song => Entity::has_many(song::Entity).into(),
        }
    }
}

impl Related<artist::Entity> for Entity {
    fn to() -> RelationDef { Relation::Artist.def() }
}

impl Related<song::Entity> for Entity {
    fn to() -> RelationDef { Relation::Song.def() }
}

impl ActiveModelBehavior for ActiveModel {}
