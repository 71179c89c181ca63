//! Background Tasks Module
//!
//! Contains background tasks that run periodically alongside the cache.
//!
//! # Tasks
//! - Expiry sweeper: removes expired cache entries at a fixed interval

mod sweeper;

pub use sweeper::{Sweeper, MAX_SWEEP_INTERVAL};
