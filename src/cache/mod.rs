//! Cache Module
//!
//! In-memory byte storage with lazy TTL expiration and sweep support.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
