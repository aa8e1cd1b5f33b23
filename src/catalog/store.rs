//! High-level `CatalogStore` wrapper over backend implementations.
//!
//! Holds the backend selected at startup plus the demo collection used to
//! answer List requests when a persistent-store query fails ("fail open":
//! a transient database outage degrades data freshness rather than
//! surfacing an error).

use super::backend::CatalogBackend;
use super::memory::{DEMO_PHOTO_COUNT, MemoryBackend};
use super::mysql::MySqlBackend;
use super::types::{NewPhoto, Photo};
use crate::config::Config;
use anyhow::Result;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Which backend the store selected at startup.
///
/// Decided once; no transitions occur for the rest of the process
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    /// MySQL reachable at startup; queries go to the database.
    Persistent,
    /// MySQL unreachable at startup; the in-memory demo catalog serves
    /// everything.
    Demo,
}

impl StoreMode {
    /// Label reported by the health endpoint.
    pub fn database_label(self) -> &'static str {
        match self {
            Self::Persistent => "connected",
            Self::Demo => "demo mode",
        }
    }
}

/// Photo catalog with a fixed backend and a demo fallback collection.
///
/// `CatalogStore` is `Clone` and can be shared across request handlers.
/// In demo mode the active backend and the fallback collection are the
/// same in-memory store, so creates and deletes land where List reads.
#[derive(Clone)]
pub struct CatalogStore {
    backend: Arc<dyn CatalogBackend>,
    demo: Arc<MemoryBackend>,
    mode: StoreMode,
    list_fallbacks: Arc<AtomicU64>,
}

impl CatalogStore {
    /// Selects the backend for the process lifetime.
    ///
    /// Attempts a MySQL connection and one liveness round-trip. On
    /// success the persistent store is active; on any failure the demo
    /// store takes over and the failure is logged once as a warning.
    pub async fn connect(config: &Config) -> Self {
        match Self::try_persistent(config).await {
            Ok(store) => {
                tracing::info!(
                    host = %config.database.host,
                    database = %config.database.database,
                    "Connected to MySQL database"
                );
                store
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Database connection failed, serving in-memory demo data"
                );
                Self::demo()
            }
        }
    }

    async fn try_persistent(config: &Config) -> Result<Self> {
        let backend = MySqlBackend::connect(&config.database).await?;
        backend.ping().await?;
        Ok(Self::persistent(backend))
    }

    /// Creates a store in demo mode: a single in-memory catalog seeded
    /// with [`DEMO_PHOTO_COUNT`] synthetic photos.
    pub fn demo() -> Self {
        let demo = Arc::new(MemoryBackend::seeded(DEMO_PHOTO_COUNT));
        Self {
            backend: demo.clone(),
            demo,
            mode: StoreMode::Demo,
            list_fallbacks: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Creates a store with the MySQL backend active.
    pub fn persistent(backend: MySqlBackend) -> Self {
        Self::custom(backend)
    }

    /// Creates a persistent-mode store with a custom backend.
    ///
    /// The demo collection is still seeded so List can fail open.
    pub fn custom<B: CatalogBackend>(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            demo: Arc::new(MemoryBackend::seeded(DEMO_PHOTO_COUNT)),
            mode: StoreMode::Persistent,
            list_fallbacks: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Returns which backend was selected at startup.
    pub fn mode(&self) -> StoreMode {
        self.mode
    }

    /// Number of List requests served from the demo collection because
    /// the persistent store failed. Always zero in demo mode.
    pub fn list_fallbacks(&self) -> u64 {
        self.list_fallbacks.load(Ordering::Relaxed)
    }

    /// Returns all photos.
    ///
    /// Never fails: a persistent-store query error is logged, counted,
    /// and answered with the demo collection's current contents.
    pub async fn list(&self) -> Vec<Photo> {
        match self.backend.list().await {
            Ok(photos) => photos,
            Err(e) => {
                tracing::warn!(error = %e, "Photo query failed, serving demo catalog");
                self.list_fallbacks.fetch_add(1, Ordering::Relaxed);
                self.demo.snapshot()
            }
        }
    }

    /// Retrieves a photo by id, `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the active backend fails.
    pub async fn get(&self, id: i64) -> Result<Option<Photo>> {
        self.backend.get(id).await
    }

    /// Inserts a new photo and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the active backend fails.
    pub async fn create(&self, new: NewPhoto) -> Result<Photo> {
        self.backend.create(new).await
    }

    /// Removes a photo by id. `Ok(true)` if it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the active backend fails.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.backend.delete(id).await
    }
}
