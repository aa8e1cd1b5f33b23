//! Photo CRUD handlers.
//!
//! Each handler validates input, calls the active catalog store, and
//! shapes the response. Required-field checks happen before any store
//! interaction.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::super::AppState;
use super::super::error::AppError;
use super::super::types::{CreatePhotoRequest, DeleteResponse};
use crate::catalog::{NewPhoto, Photo};

/// Parses a path id, treating unparseable input as "no match".
///
/// Mirrors the catalog's historical behavior on both backends: a
/// non-numeric id never matches a record, so the caller sees 404 rather
/// than a parse rejection.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| AppError::photo_not_found())
}

/// GET /api/photos - List all photos.
pub(crate) async fn list_photos(State(state): State<AppState>) -> Json<Vec<Photo>> {
    Json(state.store.list().await)
}

/// GET /api/photos/{id} - Get a single photo.
pub(crate) async fn get_photo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Photo>, AppError> {
    let id = parse_id(&id)?;
    let photo = state
        .store
        .get(id)
        .await?
        .ok_or_else(AppError::photo_not_found)?;
    Ok(Json(photo))
}

/// POST /api/photos - Create a new photo.
pub(crate) async fn create_photo(
    State(state): State<AppState>,
    Json(req): Json<CreatePhotoRequest>,
) -> Result<(StatusCode, Json<Photo>), AppError> {
    let title = req.title.filter(|t| !t.is_empty());
    let image_url = req.image_url.filter(|u| !u.is_empty());
    let (Some(title), Some(image_url)) = (title, image_url) else {
        return Err(AppError::BadRequest(
            "Title and image_url are required".to_string(),
        ));
    };

    let photo = state
        .store
        .create(NewPhoto {
            title,
            description: req.description.unwrap_or_default(),
            image_url,
            file_name: req.file_name.unwrap_or_default(),
            file_size_kb: req.file_size_kb.unwrap_or_default(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(photo)))
}

/// DELETE /api/photos/{id} - Delete a photo.
pub(crate) async fn delete_photo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = parse_id(&id)?;
    if !state.store.delete(id).await? {
        return Err(AppError::photo_not_found());
    }

    Ok(Json(DeleteResponse {
        message: "Photo deleted successfully",
        id,
    }))
}
