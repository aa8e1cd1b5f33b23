//! In-memory catalog backend seeded with demo data.
//!
//! Serves as the fallback store when MySQL is unreachable at startup, and
//! as the substitute data source when a List query fails at request time.
//! All data lives in process memory and is lost on restart.

use super::backend::CatalogBackend;
use super::types::{NewPhoto, Photo};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use parking_lot::Mutex;
use rand::Rng;

/// Number of synthetic photos seeded at construction.
pub const DEMO_PHOTO_COUNT: usize = 100;

/// Maximum back-dating applied to synthetic `created_at` stamps, in
/// milliseconds (~115 days). Keeps demo creation times spread out but
/// never in the future.
const MAX_BACKDATE_MS: i64 = 10_000_000_000;

/// Description templates cycled by ordinal when seeding.
const DESCRIPTIONS: [&str; 5] = [
    "A beautiful landscape capturing the essence of nature in its purest form. The vibrant colors and stunning composition make this a memorable piece.",
    "Urban photography at its finest. This shot captures the bustling city life with incredible detail and dynamic lighting.",
    "Portrait photography showcasing human emotion and connection. The subject's expression tells a story beyond words.",
    "Wildlife photography capturing a rare moment in nature. The patience required for this shot was well worth the result.",
    "Architectural marvel captured in stunning detail. The play of light and shadow creates a mesmerizing effect.",
];

/// Image URL prefixes cycled by ordinal; the ordinal is appended so every
/// seeded URL is unique.
const IMAGE_URLS: [&str; 3] = [
    "https://picsum.photos/800/600?random=",
    "https://loremflickr.com/800/600/nature?random=",
    "https://source.unsplash.com/800x600/?landscape,nature&sig=",
];

/// In-memory photo catalog backend.
///
/// Holds an ordered collection behind a single mutex. New photos are
/// prepended, so listing returns newest-first. Id assignment is
/// `max(existing ids) + 1`, computed under the same lock as the insert so
/// concurrent creates cannot produce duplicate ids. Deleting the
/// highest-id record means the next create reuses that id.
pub struct MemoryBackend {
    photos: Mutex<Vec<Photo>>,
}

impl MemoryBackend {
    /// Creates a backend seeded with `count` synthetic photos.
    ///
    /// Seeded records have ordinal ids `1..=count`, non-empty titles and
    /// image URLs, back-dated `created_at` stamps, and `updated_at` set
    /// to construction time.
    pub fn seeded(count: usize) -> Self {
        let now = Utc::now();
        let mut rng = rand::thread_rng();
        let photos = (1..=count)
            .map(|i| Photo {
                id: i as i64,
                title: format!("Amazing Photo {i}"),
                description: format!("{} Photo ID: {i}", DESCRIPTIONS[i % DESCRIPTIONS.len()]),
                image_url: format!("{}{i}", IMAGE_URLS[i % IMAGE_URLS.len()]),
                file_name: format!("photo_{i}.jpg"),
                file_size_kb: 500 + rng.gen_range(0..2000),
                created_at: now - Duration::milliseconds(rng.gen_range(0..MAX_BACKDATE_MS)),
                updated_at: now,
            })
            .collect();

        Self {
            photos: Mutex::new(photos),
        }
    }

    /// Returns a copy of the current collection without going through the
    /// fallible backend trait. Used for the fail-open List path.
    pub fn snapshot(&self) -> Vec<Photo> {
        self.photos.lock().clone()
    }

    /// Returns the number of photos currently held.
    pub fn len(&self) -> usize {
        self.photos.lock().len()
    }

    /// Returns true if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.photos.lock().is_empty()
    }
}

#[async_trait]
impl CatalogBackend for MemoryBackend {
    async fn list(&self) -> Result<Vec<Photo>> {
        Ok(self.snapshot())
    }

    async fn get(&self, id: i64) -> Result<Option<Photo>> {
        let photos = self.photos.lock();
        Ok(photos.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, new: NewPhoto) -> Result<Photo> {
        let now = Utc::now();
        let mut photos = self.photos.lock();
        // max+1 under the lock: the read and the insert must not interleave
        // with another create.
        let id = photos.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let photo = Photo {
            id,
            title: new.title,
            description: new.description,
            image_url: new.image_url,
            file_name: new.file_name,
            file_size_kb: new.file_size_kb,
            created_at: now,
            updated_at: now,
        };
        photos.insert(0, photo.clone());
        Ok(photo)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut photos = self.photos.lock();
        match photos.iter().position(|p| p.id == id) {
            Some(index) => {
                photos.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
