//! Cache Store Module
//!
//! Thread-safe key/value storage with lazy TTL expiration and an explicit
//! sweep for physically reclaiming expired entries.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use crate::cache::stats::StatsCounters;
use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key/value storage guarded by a single reader/writer lock.
///
/// Mutations (`set`, `delete`, `delete_expired`) take the lock exclusively;
/// lookups share it. Every operation is total: misses are reported as
/// `None`, never as errors.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Activity counters
    stats: StatsCounters,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// A zero `ttl` stores the value without expiry. Value and expiry are
    /// replaced together in one exclusive write.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Vec<u8>>, ttl: Duration) {
        self.set_at(key.into(), value.into(), ttl, Instant::now());
    }

    pub(crate) fn set_at(&self, key: String, value: Vec<u8>, ttl: Duration, now: Instant) {
        let entry = CacheEntry::new(value, ttl, now);
        self.entries.write().insert(key, entry);
    }

    // == Get ==
    /// Returns a copy of the live value stored under `key`.
    ///
    /// Expired entries are reported as missing but left in place for the
    /// sweeper or an explicit delete.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.get_at(key, Instant::now())
    }

    pub(crate) fn get_at(&self, key: &str, now: Instant) -> Option<Vec<u8>> {
        let value = {
            let entries = self.entries.read();
            entries
                .get(key)
                .filter(|entry| !entry.is_expired_at(now))
                .map(|entry| entry.value.clone())
        };

        match value {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        value
    }

    // == Delete ==
    /// Removes the entry for `key` if one exists.
    ///
    /// Deleting a missing key is a no-op. The return value only reports
    /// whether an entry was physically removed.
    pub fn delete(&self, key: &str) -> bool {
        self.entries.write().remove(key).is_some()
    }

    // == Delete Expired ==
    /// Removes every entry that has expired as of a single `now` snapshot.
    ///
    /// Returns the number of entries removed.
    pub(crate) fn delete_expired(&self) -> usize {
        self.delete_expired_at(Instant::now())
    }

    pub(crate) fn delete_expired_at(&self, now: Instant) -> usize {
        let removed = {
            let mut entries = self.entries.write();

            let expired_keys: Vec<String> = entries
                .iter()
                .filter(|(_, entry)| entry.is_expired_at(now))
                .map(|(key, _)| key.clone())
                .collect();

            for key in &expired_keys {
                entries.remove(key);
            }
            expired_keys.len()
        };

        self.stats.record_sweep(removed);
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }

    // == Length ==
    /// Returns the number of physically stored entries, including expired
    /// entries not yet swept.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing is physically stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    #[cfg(test)]
    pub(crate) fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }
}
