//! HTTP service boundary for the photo catalog.
//!
//! Assembles the axum router over the active [`CatalogStore`] and runs
//! the server. Handlers translate requests into store calls; error
//! shaping lives in [`error`].

pub mod error;
mod handlers;
pub mod types;

pub use error::AppError;

use crate::catalog::CatalogStore;
use anyhow::{Context, Result};
use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;

/// Shared state handed to every handler.
///
/// Cloning is cheap; the store is a handle over shared backends.
#[derive(Clone)]
pub struct AppState {
    pub store: CatalogStore,
}

/// Builds the API router over the given store.
///
/// CORS is permissive: the consumer is a mobile client served from a
/// different origin.
pub fn router(store: CatalogStore) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/api/photos",
            get(handlers::list_photos).post(handlers::create_photo),
        )
        .route(
            "/api/photos/{id}",
            get(handlers::get_photo).delete(handlers::delete_photo),
        )
        .route("/api/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(AppState { store })
}

/// Binds the listener and serves requests until ctrl-c.
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server loop fails.
pub async fn serve(store: CatalogStore, port: u16) -> Result<()> {
    let app = router(store);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;

    tracing::info!(port, "Server is running on http://localhost:{port}");
    tracing::info!("GET  /api/photos     - Get all photos");
    tracing::info!("GET  /api/photos/:id - Get single photo");
    tracing::info!("POST /api/photos     - Create new photo");
    tracing::info!("DELETE /api/photos/:id - Delete photo");
    tracing::info!("GET  /api/health     - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install ctrl-c handler");
    }
}
