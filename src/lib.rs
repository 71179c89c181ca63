//! TTL Cache - An embeddable in-process byte cache
//!
//! Stores opaque byte values under string keys with optional per-entry TTL.
//! Expired entries read as missing immediately and are physically reclaimed
//! by a background sweeper.

pub mod api;
pub mod cache;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use driver::CacheDriver;
pub use engine::CacheEngine;
pub use error::{CacheError, Result};
