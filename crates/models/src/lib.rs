//! SeaORM entities for the music catalog plus connection helpers.

pub mod db;
pub mod artist;
pub mod album;
pub mod song;
pub mod playlist;
pub mod user;
pub mod playlist_song;
pub mod playlist_user;

#[cfg(test)]
mod tests;
