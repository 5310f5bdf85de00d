//! Generic CRUD over the five catalog kinds.
//!
//! A [`CatalogKind`] describes one entity kind; [`CatalogService`] implements the
//! create/update/delete rules once for all of them on top of a [`CatalogRepository`].

pub mod kind;
pub mod kinds;
pub mod repository;
pub mod seaorm;
pub mod service;


use std::sync::Arc;

use sea_orm::{DatabaseConnection, FromQueryResult, IntoActiveModel};

pub use kind::CatalogKind;
pub use kinds::{album::AlbumKind, artist::ArtistKind, playlist::PlaylistKind, song::SongKind, user::UserKind};
pub use repository::CatalogRepository;
pub use seaorm::{SeaOrmKind, SeaOrmRepository};
pub use service::CatalogService;

pub type ArtistService = CatalogService<ArtistKind>;
pub type AlbumService = CatalogService<AlbumKind>;
pub type SongService = CatalogService<SongKind>;
pub type PlaylistService = CatalogService<PlaylistKind>;
pub type UserService = CatalogService<UserKind>;

/// Service backed by the relational store.
pub fn seaorm_service<K>(db: &DatabaseConnection) -> CatalogService<K>
where
    K: SeaOrmKind,
    K::Record: IntoActiveModel<K::ActiveModel> + FromQueryResult,
{
    CatalogService::new(Arc::new(SeaOrmRepository::<K>::new(db.clone())))
}
