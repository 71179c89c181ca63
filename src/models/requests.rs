//! Request DTOs for the HTTP binding
//!
//! Defines the query parameters accepted alongside raw value bodies.

use serde::Deserialize;

/// Query parameters for the SET operation (PUT /cache/:key)
///
/// # Fields
/// - `ttl`: TTL in seconds; absent, zero or negative means no expiry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetQuery {
    /// TTL in seconds
    #[serde(default)]
    pub ttl: i64,
}
