pub mod artist;
pub mod album;
pub mod song;
pub mod playlist;
pub mod user;
