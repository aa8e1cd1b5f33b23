//! Health and root handlers.

use axum::{Json, extract::State};
use chrono::Utc;

use super::super::AppState;
use super::super::types::HealthResponse;

/// GET /api/health - Report which store is active and the current time.
///
/// Never touches the store; always succeeds.
pub(crate) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        database: state.store.mode().database_label(),
        timestamp: Utc::now().to_rfc3339(),
        list_fallbacks: state.store.list_fallbacks(),
    })
}

/// GET / - Static description of the available endpoints.
pub(crate) async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Photo API Server for Android Performance Demo",
        "endpoints": {
            "GET /api/photos": "Get all photos",
            "GET /api/photos/:id": "Get single photo",
            "POST /api/photos": "Create new photo",
            "DELETE /api/photos/:id": "Delete photo",
            "GET /api/health": "Health check"
        }
    }))
}
