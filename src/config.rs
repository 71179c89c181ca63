//! Configuration Module
//!
//! Handles loading the host configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default seconds between expiry sweeps.
pub const DEFAULT_SWEEP_INTERVAL: u64 = 60;

/// Default HTTP port for the bundled host.
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Host configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seconds between background expiry sweeps, 0 disables the sweeper
    pub sweep_interval: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds, 0 disables (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SWEEP_INTERVAL),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Sweep interval as a `Duration`; zero means sweeping is disabled.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}
