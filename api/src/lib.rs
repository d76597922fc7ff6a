//! HTTP surface for the search API.
//!
//! Two endpoints: `GET /search` for full-text search over the document
//! index and `GET /metadata/{cid}/` for per-document metadata. Both are
//! thin chains over the injected engine client; all normalization lives
//! in `search-core`.

use std::sync::Arc;

mod core;
mod error_handler;
mod routes;

pub use crate::core::app_state::AppState;
pub use crate::error_handler::{AppError, AppResult};

use axum::{Router, routing::get};
use tokio::signal;
use tracing::info;

use crate::routes::{metadata::metadata_route::metadata_route, search::search_route::search_route};

/// Builds the application router for a given state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/search", get(search_route))
        .route("/metadata/{cid}/", get(metadata_route))
        .with_state(state)
}

/// Starts the HTTP server and blocks until shutdown.
pub async fn start() -> Result<(), AppError> {
    let state = Arc::new(AppState::from_env()?);
    let address = std::env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:9615".into());

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(AppError::Bind)?;
    info!(%address, "search API listening");

    // Serve with graceful shutdown on Ctrl+C.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if signal::ctrl_c().await.is_err() {
        tracing::warn!("failed to listen for shutdown signal");
    }
}
