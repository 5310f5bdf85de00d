//! Migrator registering catalog migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_artist;
mod m20240301_000002_create_album;
mod m20240301_000003_create_song;
mod m20240301_000004_create_playlist;
mod m20240301_000005_create_user;
mod m20240301_000006_create_playlist_song;
mod m20240301_000007_create_playlist_user;
mod m20240301_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_artist::Migration),
            Box::new(m20240301_000002_create_album::Migration),
            Box::new(m20240301_000003_create_song::Migration),
            Box::new(m20240301_000004_create_playlist::Migration),
            Box::new(m20240301_000005_create_user::Migration),
            Box::new(m20240301_000006_create_playlist_song::Migration),
            Box::new(m20240301_000007_create_playlist_user::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000010_add_indexes::Migration),
        ]
    }
}
