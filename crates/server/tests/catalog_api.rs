use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use migration::MigratorTrait;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::{routes::build_router, state::ServerState};

async fn app() -> anyhow::Result<Router> {
    let db = models::db::connect_with_config(&configs::DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(build_router(ServerState::new(db), CorsLayer::very_permissive(), None))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let res = app.clone().oneshot(req.body(body)?).await?;
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    Ok((status, json))
}

#[tokio::test]
async fn health_ok() -> anyhow::Result<()> {
    let app = app().await?;
    let (status, body) = send(&app, Method::GET, "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
    Ok(())
}

#[tokio::test]
async fn artist_crud_over_http() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, created) = send(&app, Method::POST, "/artist", Some(json!({"name": "Nirvana", "starting_date": "1987-01-01"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Nirvana");
    let id = created["id"].as_str().unwrap().to_string();

    let (status, err) = send(&app, Method::POST, "/artist", Some(json!({"name": "Nirvana", "starting_date": "1990-01-01"}))).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(err["error"], "Conflict");

    let uri = format!("/artist/{}", id);
    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"name": "", "starting_date": "1988-01-01"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, ok) = send(&app, Method::PUT, &uri, Some(json!({"name": "Nirvana", "starting_date": "1988-01-01"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ok, json!(true));

    let (_, list) = send(&app, Method::GET, "/artist", None).await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    assert_eq!(list[0]["id"], id.as_str());
    assert_eq!(list[0]["starting_date"], "1988-01-01");

    let (status, ok) = send(&app, Method::DELETE, &uri, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ok, json!(true));
    let (status, err) = send(&app, Method::DELETE, &uri, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["error"], "Not Found");
    assert_eq!(err["message"], format!("artist {} not found", id));
    Ok(())
}

#[tokio::test]
async fn users_never_expose_password() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, created) = send(&app, Method::POST, "/user", Some(json!({"username": "alice", "password": "x"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created.get("password").is_none());

    let (status, _) = send(&app, Method::POST, "/user", Some(json!({"username": "alice", "password": "y"}))).await?;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, list) = send(&app, Method::GET, "/user", None).await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    assert!(list[0].get("password").is_none());
    Ok(())
}

#[tokio::test]
async fn album_and_song_reference_artist() -> anyhow::Result<()> {
    let app = app().await?;

    let (_, artist) = send(&app, Method::POST, "/artist", Some(json!({"name": "Pixies", "starting_date": "1986-01-01"}))).await?;
    let (status, album) = send(&app, Method::POST, "/album", Some(json!({"name": "Doolittle", "artist_id": artist["id"]}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(album["artist_id"], artist["id"]);

    let (status, song) = send(&app, Method::POST, "/song", Some(json!({"name": "Hey", "artist_id": artist["id"], "album_id": album["id"]}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(song["album_id"], album["id"]);

    let uri = format!("/album/{}", album["id"].as_str().unwrap());
    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"artist_id": artist["id"]}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // explicit null detaches, absent keeps
    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"name": "Doolittle", "artist_id": null}))).await?;
    assert_eq!(status, StatusCode::OK);
    let song_uri = format!("/song/{}", song["id"].as_str().unwrap());
    let (status, _) = send(&app, Method::PUT, &song_uri, Some(json!({"name": "Hey", "album_id": null}))).await?;
    assert_eq!(status, StatusCode::OK);

    let (_, albums) = send(&app, Method::GET, "/album", None).await?;
    assert_eq!(albums[0]["artist_id"], Value::Null);
    let (_, songs) = send(&app, Method::GET, "/song", None).await?;
    assert_eq!(songs[0]["album_id"], Value::Null);
    assert_eq!(songs[0]["artist_id"], artist["id"]);
    Ok(())
}

#[tokio::test]
async fn unknown_and_malformed_ids() -> anyhow::Result<()> {
    let app = app().await?;

    let uri = format!("/playlist/{}", Uuid::new_v4());
    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"name": "x"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/playlist/not-a-uuid", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn playlist_membership_routes() -> anyhow::Result<()> {
    let app = app().await?;

    let (_, playlist) = send(&app, Method::POST, "/playlist", Some(json!({"name": "Mix"}))).await?;
    let (_, song) = send(&app, Method::POST, "/song", Some(json!({"name": "Gigantic"}))).await?;
    let (_, user) = send(&app, Method::POST, "/user", Some(json!({"username": "kim", "password": "pw"}))).await?;
    let pid = playlist["id"].as_str().unwrap();

    let link = format!("/playlist/{}/songs/{}", pid, song["id"].as_str().unwrap());
    let (status, ok) = send(&app, Method::PUT, &link, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ok, json!(true));
    let (status, _) = send(&app, Method::PUT, &link, None).await?;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, songs) = send(&app, Method::GET, &format!("/playlist/{}/songs", pid), None).await?;
    assert_eq!(songs[0]["name"], "Gigantic");

    let (status, _) = send(&app, Method::DELETE, &link, None).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, &link, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let member = format!("/playlist/{}/users/{}", pid, user["id"].as_str().unwrap());
    let (status, _) = send(&app, Method::PUT, &member, None).await?;
    assert_eq!(status, StatusCode::OK);
    let (_, users) = send(&app, Method::GET, &format!("/playlist/{}/users", pid), None).await?;
    assert_eq!(users[0]["username"], "kim");
    assert!(users[0].get("password").is_none());

    let (status, _) = send(&app, Method::GET, &format!("/playlist/{}/songs", Uuid::new_v4()), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
