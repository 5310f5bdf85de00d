//! Environment/runtime helpers
//!
//! Sanity checks run once at startup.

use tracing::{info, warn};

/// Check the optional static frontend directory; returns whether it can be served.
pub async fn check_static_dir(static_dir: &str) -> bool {
    match tokio::fs::metadata(static_dir).await {
        Ok(meta) if meta.is_dir() => {
            info!(%static_dir, "serving frontend assets");
            true
        }
        _ => {
            warn!(%static_dir, "frontend assets directory not found; only the JSON API is served");
            false
        }
    }
}
