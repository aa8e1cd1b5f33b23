//! Backend trait for the photo catalog.
//!
//! Defines the interface that both catalog backends implement, enabling
//! the persistent MySQL store and the in-memory demo store to be used
//! interchangeably behind [`super::CatalogStore`].

use super::types::{NewPhoto, Photo};
use anyhow::Result;
use async_trait::async_trait;

/// Backend trait for photo storage.
///
/// All backends must be thread-safe (`Send + Sync`) for use with tokio.
/// Implementations handle their own concurrency; id assignment and
/// insertion must be atomic with respect to concurrent callers.
#[async_trait]
pub trait CatalogBackend: Send + Sync + 'static {
    /// Returns all photos in the backend's defined order.
    ///
    /// The persistent backend orders by `created_at` descending; the
    /// in-memory backend returns insertion order with the newest records
    /// first. Callers must not assume a single canonical order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage operation fails.
    async fn list(&self) -> Result<Vec<Photo>>;

    /// Retrieves a photo by id.
    ///
    /// Returns `Ok(None)` if no photo with that id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage operation fails.
    async fn get(&self, id: i64) -> Result<Option<Photo>>;

    /// Inserts a new photo, assigning a fresh id and stamping both
    /// timestamps to the current time. Returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage operation fails.
    async fn create(&self, new: NewPhoto) -> Result<Photo>;

    /// Removes a photo by id.
    ///
    /// Returns `Ok(true)` if the photo existed and was removed,
    /// `Ok(false)` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage operation fails.
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Round-trip liveness check.
    ///
    /// Used once at startup to decide whether the backend is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable.
    async fn ping(&self) -> Result<()>;
}
