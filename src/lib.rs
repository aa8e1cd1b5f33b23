//! REST API server for the heavy-gallery photo catalog demo.
//!
//! Exposes CRUD over a single `photos` entity backed by either a pooled
//! MySQL database or an in-memory demo catalog, selected once at startup
//! based on database reachability. The library surface exists so
//! integration tests can drive the router in-process.

pub mod catalog;
pub mod config;
pub mod http;
