//! HTTP API handlers.

pub mod photos;
pub mod system;

// Re-export all handlers for use in routing
pub(crate) use photos::{create_photo, delete_photo, get_photo, list_photos};
pub(crate) use system::{health, root};
