//! Request and Response models for the HTTP binding
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request parameters and response bodies.
//! Cached values themselves travel as raw bytes, not JSON.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::SetQuery;
pub use responses::{ErrorResponse, ForgetResponse, HealthResponse, SetResponse, StatsResponse};
