use std::net::SocketAddr;

use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::{routes::build_router, state::ServerState};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect_with_config(&configs::DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;

    let app = build_router(ServerState::new(db), CorsLayer::very_permissive(), None);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_health_and_catalog() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = client
        .post(format!("{}/playlist", app.base_url))
        .json(&json!({"name": "Road trip"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created: Value = res.json().await?;

    let res = client
        .put(format!("{}/playlist/{}", app.base_url, created["id"].as_str().unwrap()))
        .json(&json!({"name": "Night drive"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let list: Value = client.get(format!("{}/playlist", app.base_url)).send().await?.json().await?;
    assert_eq!(list, json!([{"id": created["id"], "name": "Night drive"}]));
    Ok(())
}

#[tokio::test]
async fn e2e_error_body_shape() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .delete(format!("{}/song/{}", app.base_url, uuid::Uuid::new_v4()))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Not Found");
    assert!(body["message"].as_str().is_some_and(|m| m.contains("song")));
    Ok(())
}
