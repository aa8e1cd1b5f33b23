//! Photo catalog store with pluggable backends.
//!
//! The catalog holds photo records behind a narrow CRUD surface with two
//! interchangeable implementations:
//!
//! - **MySqlBackend**: pooled, parameterized access to the `photos` table
//! - **MemoryBackend**: in-memory collection seeded with demo records,
//!   used when the database is unreachable
//!
//! The backend is selected once at startup by [`CatalogStore::connect`]
//! and held for the process lifetime; there is no runtime re-probing.

mod backend;
mod memory;
mod mysql;
mod store;
mod types;


// Re-export the public API
pub use backend::CatalogBackend;
pub use memory::{DEMO_PHOTO_COUNT, MemoryBackend};
pub use mysql::MySqlBackend;
pub use store::{CatalogStore, StoreMode};
pub use types::{NewPhoto, Photo};
