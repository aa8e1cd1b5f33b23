//! MySQL catalog backend.
//!
//! Pooled access to the pre-existing `photos` table. All statements are
//! parameterized; no SQL is built from request strings. The schema is
//! assumed to exist (no migrations subsystem in this service).

use super::backend::CatalogBackend;
use super::types::{NewPhoto, Photo};
use crate::config::DatabaseConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

const SELECT_COLUMNS: &str =
    "SELECT id, title, description, image_url, file_name, file_size_kb, created_at, updated_at \
     FROM photos";

/// MySQL-backed photo catalog.
///
/// Holds a bounded connection pool; when all connections are in use,
/// callers wait for one to free up rather than failing immediately.
pub struct MySqlBackend {
    pool: MySqlPool,
}

impl MySqlBackend {
    /// Opens a connection pool against the configured database.
    ///
    /// Establishes one connection eagerly so an unreachable server is
    /// detected here rather than on the first request.
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable or credentials are
    /// rejected.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let opts = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);

        let pool = MySqlPoolOptions::new()
            .max_connections(config.pool_size)
            .connect_with(opts)
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to MySQL at {}:{}/{}",
                    config.host, config.port, config.database
                )
            })?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl CatalogBackend for MySqlBackend {
    async fn list(&self) -> Result<Vec<Photo>> {
        let photos =
            sqlx::query_as::<_, Photo>(&format!("{SELECT_COLUMNS} ORDER BY created_at DESC"))
                .fetch_all(&self.pool)
                .await
                .context("Failed to list photos")?;
        Ok(photos)
    }

    async fn get(&self, id: i64) -> Result<Option<Photo>> {
        let photo = sqlx::query_as::<_, Photo>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to fetch photo {id}"))?;
        Ok(photo)
    }

    async fn create(&self, new: NewPhoto) -> Result<Photo> {
        let result = sqlx::query(
            "INSERT INTO photos (title, description, image_url, file_name, file_size_kb) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.image_url)
        .bind(&new.file_name)
        .bind(new.file_size_kb)
        .execute(&self.pool)
        .await
        .context("Failed to insert photo")?;

        let id = result.last_insert_id() as i64;

        // Read the row back so the caller sees the server-stamped
        // timestamps, not locally computed ones.
        let photo = sqlx::query_as::<_, Photo>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .with_context(|| format!("Failed to read back created photo {id}"))?;
        Ok(photo)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM photos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to delete photo {id}"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database liveness check failed")?;
        Ok(())
    }
}
