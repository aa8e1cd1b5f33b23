//! Core types for the photo catalog.
//!
//! Contains the photo record, the creation field set, and the timestamp
//! serialization helper shared by all backends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Serde helper for `DateTime<Utc>` as RFC3339 string (matches the wire
/// format Android clients already parse).
pub(crate) mod datetime_rfc3339 {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// A photo record as stored and served by the catalog.
///
/// `id` is assigned by the active backend on creation. `title` and
/// `image_url` are never empty for a stored record; the remaining text
/// fields default to empty and `file_size_kb` to zero.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Photo {
    /// Unique identifier within the active store.
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub file_name: String,
    pub file_size_kb: i64,
    /// Set once at creation, immutable thereafter.
    #[serde(with = "datetime_rfc3339")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "datetime_rfc3339")]
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating a photo.
///
/// Required-field validation happens at the service boundary; by the time
/// a `NewPhoto` reaches a backend, `title` and `image_url` are non-empty
/// and the optional fields carry their documented defaults.
#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub file_name: String,
    pub file_size_kb: i64,
}
