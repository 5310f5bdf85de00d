use sea_orm::DatabaseConnection;
use service::catalog::{
    seaorm_service, AlbumService, ArtistService, PlaylistService, SongService, UserService,
};

/// Services wired once at startup and shared by all handlers.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub artists: ArtistService,
    pub albums: AlbumService,
    pub songs: SongService,
    pub playlists: PlaylistService,
    pub users: UserService,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            artists: seaorm_service(&db),
            albums: seaorm_service(&db),
            songs: seaorm_service(&db),
            playlists: seaorm_service(&db),
            users: seaorm_service(&db),
            db,
        }
    }
}
