//! Cache Engine Module
//!
//! Owns a [`CacheStore`] together with its optional background sweeper and
//! exposes explicit `init` / `shutdown` lifecycle calls.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::info;

use crate::cache::{CacheStats, CacheStore};
use crate::config::Config;
use crate::error::Result;
use crate::tasks::Sweeper;

// == Cache Engine ==
/// The cache handed to every consumer, usually as `Arc<CacheEngine>`.
///
/// # Example
/// ```ignore
/// let engine = CacheEngine::init(Duration::from_secs(60))?;
/// engine.set("session:42", b"payload".to_vec(), Duration::from_secs(30));
/// assert!(engine.get("session:42").is_some());
/// engine.shutdown().await;
/// ```
#[derive(Debug)]
pub struct CacheEngine {
    store: Arc<CacheStore>,
    sweeper: Mutex<Option<Sweeper>>,
}

impl CacheEngine {
    // == Init ==
    /// Creates an engine and, for a non-zero `sweep_interval`, starts its
    /// background sweeper.
    ///
    /// With a zero interval no sweeper is created and expiry is purely lazy;
    /// no Tokio runtime is needed in that case.
    ///
    /// # Errors
    /// Returns [`CacheError::NoRuntime`](crate::error::CacheError::NoRuntime)
    /// when a sweeper is requested outside a Tokio runtime.
    pub fn init(sweep_interval: Duration) -> Result<Arc<Self>> {
        let store = Arc::new(CacheStore::new());

        let sweeper = if sweep_interval.is_zero() {
            info!("Cache engine initialized without sweeper, expiry is lazy only");
            None
        } else {
            let sweeper = Sweeper::spawn(store.clone(), sweep_interval)?;
            info!(
                "Cache engine initialized, sweeping every {} ms",
                sweeper.interval().as_millis()
            );
            Some(sweeper)
        };

        Ok(Arc::new(Self {
            store,
            sweeper: Mutex::new(sweeper),
        }))
    }

    /// Creates an engine using the sweep interval from `config`.
    pub fn from_config(config: &Config) -> Result<Arc<Self>> {
        Self::init(config.sweep_interval())
    }

    // == Shutdown ==
    /// Stops the background sweeper and waits for its task to finish.
    ///
    /// Calling this more than once is harmless. Stored entries remain
    /// readable afterwards; only background sweeping stops.
    pub async fn shutdown(&self) {
        let sweeper = self.sweeper.lock().take();

        if let Some(sweeper) = sweeper {
            sweeper.stop().await;
            info!("Cache engine shut down");
        }
    }

    /// Returns true while a sweeper task is attached and alive.
    pub fn has_sweeper(&self) -> bool {
        self.sweeper
            .lock()
            .as_ref()
            .is_some_and(|sweeper| sweeper.is_running())
    }

    /// Shared handle to the underlying store.
    pub fn store(&self) -> &Arc<CacheStore> {
        &self.store
    }

    // == Cache Operations ==
    /// Stores `value` under `key`. A zero `ttl` means the entry never expires.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Vec<u8>>, ttl: Duration) {
        self.store.set(key, value, ttl);
    }

    /// Returns the live value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.get(key)
    }

    /// Removes `key`. Missing keys are ignored.
    pub fn delete(&self, key: &str) {
        self.store.delete(key);
    }

    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;

    #[test]
    fn test_init_without_sweeper_needs_no_runtime() {
        let engine = CacheEngine::init(Duration::ZERO).unwrap();

        assert!(!engine.has_sweeper());
        engine.set("a", "1", Duration::ZERO);
        assert_eq!(engine.get("a"), Some(b"1".to_vec()));
    }

    #[test]
    fn test_init_with_sweeper_outside_runtime_fails() {
        let result = CacheEngine::init(Duration::from_secs(60));
        assert!(matches!(result, Err(CacheError::NoRuntime)));
    }

    #[test]
    fn test_shutdown_from_sync_host() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let engine = runtime
            .block_on(async { CacheEngine::init(Duration::from_millis(10)) })
            .unwrap();
        assert!(engine.has_sweeper());

        runtime.block_on(engine.shutdown());
        assert!(!engine.has_sweeper());
    }

    #[tokio::test]
    async fn test_from_config() {
        let config = Config {
            sweep_interval: 1,
            ..Config::default()
        };
        let engine = CacheEngine::from_config(&config).unwrap();
        assert!(engine.has_sweeper());

        engine.shutdown().await;
        assert!(!engine.has_sweeper());
    }

    #[tokio::test]
    async fn test_init_with_huge_interval_keeps_sweeper_alive() {
        let engine = CacheEngine::init(Duration::MAX).unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(engine.has_sweeper());

        engine.shutdown().await;
        assert!(!engine.has_sweeper());
    }

    #[tokio::test]
    async fn test_shutdown_is_idempotent() {
        let engine = CacheEngine::init(Duration::from_millis(10)).unwrap();

        engine.shutdown().await;
        engine.shutdown().await;
        assert!(!engine.has_sweeper());
    }

    #[tokio::test]
    async fn test_entries_survive_shutdown() {
        let engine = CacheEngine::init(Duration::from_millis(10)).unwrap();
        engine.set("kept", "v", Duration::ZERO);

        engine.shutdown().await;

        assert_eq!(engine.get("kept"), Some(b"v".to_vec()));
        engine.delete("kept");
        assert!(engine.get("kept").is_none());
    }
}
