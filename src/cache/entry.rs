//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single stored value and the instant after which it is treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The stored bytes, owned exclusively by the entry
    pub value: Vec<u8>,
    /// Expiration instant, None = no expiration
    pub expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry whose TTL is measured from `now`.
    ///
    /// A zero `ttl` means the entry never expires. A TTL too large for the
    /// monotonic clock to represent is also stored without expiry.
    pub fn new(value: Vec<u8>, ttl: Duration, now: Instant) -> Self {
        let expires_at = if ttl.is_zero() {
            None
        } else {
            now.checked_add(ttl)
        };

        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired as of `now`.
    ///
    /// Boundary condition: the entry is still live at exactly its expiry
    /// instant and becomes expired strictly after it.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now > expires,
            None => false,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation_no_ttl() {
        let entry = CacheEntry::new(b"test_value".to_vec(), Duration::ZERO, Instant::now());

        assert_eq!(entry.value, b"test_value");
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired_at(Instant::now()));
    }

    #[test]
    fn test_entry_creation_with_ttl() {
        let now = Instant::now();
        let entry = CacheEntry::new(b"test_value".to_vec(), Duration::from_secs(60), now);

        assert_eq!(entry.expires_at, Some(now + Duration::from_secs(60)));
        assert!(!entry.is_expired_at(now));
    }

    #[test]
    fn test_entry_empty_value() {
        let entry = CacheEntry::new(Vec::new(), Duration::ZERO, Instant::now());
        assert!(entry.value.is_empty());
    }

    #[test]
    fn test_entry_expiration() {
        let now = Instant::now();
        let entry = CacheEntry::new(b"v".to_vec(), Duration::from_millis(100), now);

        assert!(!entry.is_expired_at(now + Duration::from_millis(99)));
        assert!(entry.is_expired_at(now + Duration::from_millis(101)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let entry = CacheEntry {
            value: b"test".to_vec(),
            expires_at: Some(now),
        };

        // Live at the exact instant, expired strictly after
        assert!(!entry.is_expired_at(now));
        assert!(entry.is_expired_at(now + Duration::from_nanos(1)));
    }

    #[test]
    fn test_never_expiring_entry_stays_live() {
        let now = Instant::now();
        let entry = CacheEntry::new(b"v".to_vec(), Duration::ZERO, now);

        assert!(!entry.is_expired_at(now + Duration::from_secs(365 * 24 * 3600)));
    }

    #[test]
    fn test_overflowing_ttl_never_expires() {
        let entry = CacheEntry::new(b"v".to_vec(), Duration::MAX, Instant::now());
        assert!(entry.expires_at.is_none());
    }
}
