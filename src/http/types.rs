//! Request and response bodies for the photo API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/photos`.
///
/// Only `title` and `image_url` are required; the rest default per the
/// data model (`""` for text fields, `0` for the size).
#[derive(Debug, Deserialize)]
pub struct CreatePhotoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub file_name: Option<String>,
    pub file_size_kb: Option<i64>,
}

/// Body of a successful `DELETE /api/photos/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub id: i64,
}

/// Body of `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// `"connected"` when the persistent store is active, `"demo mode"`
    /// otherwise.
    pub database: &'static str,
    pub timestamp: String,
    /// List requests served from the demo collection because the
    /// persistent store failed. Non-zero means freshness is degraded.
    pub list_fallbacks: u64,
}
