//! Expiry Sweeper Task
//!
//! Background task that periodically removes expired cache entries until it
//! is told to stop.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::CacheStore;
use crate::error::{CacheError, Result};

/// Longest interval between sweeps; longer requests are capped.
///
/// Keeps every tick deadline representable by the monotonic clock.
pub const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// A running expiry sweeper bound to one store.
///
/// The sweeper starts on [`Sweeper::spawn`] and runs until [`Sweeper::stop`]
/// is awaited. Dropping a `Sweeper` also stops the task, since the task
/// treats a closed stop channel as a stop signal. It just isn't waited for.
#[derive(Debug)]
pub struct Sweeper {
    interval: Duration,
    stop_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl Sweeper {
    /// Spawns the sweeper on the current Tokio runtime.
    ///
    /// The first sweep runs one full interval after spawning. Intervals
    /// longer than [`MAX_SWEEP_INTERVAL`] are capped to it.
    ///
    /// # Errors
    /// - [`CacheError::InvalidInterval`] when `interval` is zero
    /// - [`CacheError::NoRuntime`] when called outside a Tokio runtime
    ///
    /// # Example
    /// ```ignore
    /// let store = Arc::new(CacheStore::new());
    /// let sweeper = Sweeper::spawn(store.clone(), Duration::from_secs(60))?;
    /// // Later, during shutdown:
    /// sweeper.stop().await;
    /// ```
    pub fn spawn(store: Arc<CacheStore>, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(CacheError::InvalidInterval);
        }
        let runtime = Handle::try_current().map_err(|_| CacheError::NoRuntime)?;

        let interval = if interval > MAX_SWEEP_INTERVAL {
            warn!(
                "Sweep interval of {} s capped to {} s",
                interval.as_secs(),
                MAX_SWEEP_INTERVAL.as_secs()
            );
            MAX_SWEEP_INTERVAL
        } else {
            interval
        };

        let (stop_tx, stop_rx) = oneshot::channel();
        let handle = runtime.spawn(run(store, interval, stop_rx));

        Ok(Self {
            interval,
            stop_tx,
            handle,
        })
    }

    /// Interval between sweeps.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true until the background task has terminated.
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Signals the task to stop and waits for it to finish.
    ///
    /// Once this returns no further sweeps will run.
    pub async fn stop(self) {
        // The task may already be gone, in which case the receiver is dropped
        let _ = self.stop_tx.send(());

        if let Err(err) = self.handle.await {
            warn!("Sweeper task ended abnormally: {}", err);
        }
    }
}

async fn run(store: Arc<CacheStore>, period: Duration, mut stop_rx: oneshot::Receiver<()>) {
    info!(
        "Starting expiry sweeper with interval of {} ms",
        period.as_millis()
    );

    let now = time::Instant::now();
    let first_tick = now.checked_add(period).unwrap_or(now);
    let mut ticker = time::interval_at(first_tick, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let removed = store.delete_expired();

                if removed > 0 {
                    info!("Expiry sweep: removed {} expired entries", removed);
                } else {
                    debug!("Expiry sweep: no expired entries found");
                }
            }
            // Fires on an explicit stop and when the sender is dropped
            _ = &mut stop_rx => break,
        }
    }

    info!("Expiry sweeper stopped");
}
