use std::net::SocketAddr;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use configs::{AppConfig, ServerConfig};
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

/// Config file first, then environment variables.
pub fn load_config() -> Result<AppConfig, StartupError> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            warn!(error = %e, "config.toml unavailable; falling back to environment");
            AppConfig::from_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))
        }
    }
}

/// Restrict CORS to the configured frontend origin, or allow everything when unset.
pub fn build_cors(server: &ServerConfig) -> Result<CorsLayer, StartupError> {
    let Some(origin) = server.frontend_url.as_deref() else {
        return Ok(CorsLayer::very_permissive());
    };
    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| StartupError::InvalidConfig(format!("server.frontend_url: {}", e)))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Connect, migrate and assemble the router for a validated config.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None).await.map_err(anyhow::Error::from)?;
        info!("migrations applied");
    }

    let static_dir = match cfg.server.static_dir.as_deref() {
        Some(dir) => common::env::check_static_dir(dir).await.then_some(dir),
        None => None,
    };
    let cors = build_cors(&cfg.server)?;
    Ok(routes::build_router(ServerState::new(db), cors, static_dir))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let app = build_app(&cfg).await?;

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {}", e)))?;
    let listener = TcpListener::bind(addr).await.map_err(anyhow::Error::from)?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)?;
    Ok(())
}
