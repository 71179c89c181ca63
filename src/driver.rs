//! Driver Interface
//!
//! The narrow surface that host bindings program against: `get`, `set` and
//! `forget` over string keys and opaque byte buffers. Bindings convert their
//! native string and byte types into these; the cache core knows nothing
//! about any particular host.

use std::time::Duration;

use crate::cache::CacheStore;
use crate::engine::CacheEngine;

/// Converts a binding-level TTL in whole seconds into a cache TTL.
///
/// Zero and negative values mean "never expires".
pub fn ttl_from_seconds(ttl_seconds: i64) -> Duration {
    if ttl_seconds <= 0 {
        Duration::ZERO
    } else {
        Duration::from_secs(ttl_seconds.unsigned_abs())
    }
}

/// Host-facing cache operations.
pub trait CacheDriver {
    /// Returns the stored bytes, or `None` when the key is absent or expired.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Stores a copy of `value`. `ttl_seconds <= 0` means no expiry.
    /// Always reports success.
    fn set(&self, key: &str, value: &[u8], ttl_seconds: i64) -> bool;

    /// Removes `key`. Always reports success, even if nothing was stored.
    fn forget(&self, key: &str) -> bool;

    /// Returns the cached value for `key`, computing and storing it on a miss.
    ///
    /// Not atomic: concurrent callers missing on the same key may each run
    /// `compute`, and the last write wins.
    fn remember<F>(&self, key: &str, ttl_seconds: i64, compute: F) -> Vec<u8>
    where
        F: FnOnce() -> Vec<u8>,
    {
        if let Some(value) = self.get(key) {
            return value;
        }

        let value = compute();
        self.set(key, &value, ttl_seconds);
        value
    }
}

impl CacheDriver for CacheStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        CacheStore::get(self, key)
    }

    fn set(&self, key: &str, value: &[u8], ttl_seconds: i64) -> bool {
        CacheStore::set(self, key, value, ttl_from_seconds(ttl_seconds));
        true
    }

    fn forget(&self, key: &str) -> bool {
        CacheStore::delete(self, key);
        true
    }
}

impl CacheDriver for CacheEngine {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        CacheEngine::get(self, key)
    }

    fn set(&self, key: &str, value: &[u8], ttl_seconds: i64) -> bool {
        CacheEngine::set(self, key, value, ttl_from_seconds(ttl_seconds));
        true
    }

    fn forget(&self, key: &str) -> bool {
        CacheEngine::delete(self, key);
        true
    }
}
