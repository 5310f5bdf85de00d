use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use service::playlist_links;
use uuid::Uuid;

use crate::errors::JsonApiError;

async fn list_songs(State(db): State<DatabaseConnection>, Path(id): Path<Uuid>) -> Result<Json<Vec<models::song::Model>>, JsonApiError> {
    Ok(Json(playlist_links::list_songs(&db, id).await?))
}

async fn add_song(State(db): State<DatabaseConnection>, Path((id, song_id)): Path<(Uuid, Uuid)>) -> Result<Json<bool>, JsonApiError> {
    Ok(Json(playlist_links::add_song(&db, id, song_id).await?))
}

async fn remove_song(State(db): State<DatabaseConnection>, Path((id, song_id)): Path<(Uuid, Uuid)>) -> Result<Json<bool>, JsonApiError> {
    Ok(Json(playlist_links::remove_song(&db, id, song_id).await?))
}

async fn list_users(State(db): State<DatabaseConnection>, Path(id): Path<Uuid>) -> Result<Json<Vec<models::user::Model>>, JsonApiError> {
    Ok(Json(playlist_links::list_users(&db, id).await?))
}

async fn add_user(State(db): State<DatabaseConnection>, Path((id, user_id)): Path<(Uuid, Uuid)>) -> Result<Json<bool>, JsonApiError> {
    Ok(Json(playlist_links::add_user(&db, id, user_id).await?))
}

async fn remove_user(State(db): State<DatabaseConnection>, Path((id, user_id)): Path<(Uuid, Uuid)>) -> Result<Json<bool>, JsonApiError> {
    Ok(Json(playlist_links::remove_user(&db, id, user_id).await?))
}

pub fn routes(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/playlist/:id/songs", get(list_songs))
        .route("/playlist/:id/songs/:song_id", put(add_song).delete(remove_song))
        .route("/playlist/:id/users", get(list_users))
        .route("/playlist/:id/users/:user_id", put(add_user).delete(remove_user))
        .with_state(db)
}
