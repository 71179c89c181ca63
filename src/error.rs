//! Error types for the cache
//!
//! Cache operations themselves are total; these errors cover engine
//! lifecycle and the HTTP binding.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache crate.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key not found or expired
    #[error("Key not found: {0}")]
    NotFound(String),

    /// A background sweeper was requested outside a Tokio runtime
    #[error("Sweeper requires a running Tokio runtime")]
    NoRuntime,

    /// A background sweeper was requested with a zero interval
    #[error("Sweep interval must be greater than zero")]
    InvalidInterval,
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::NoRuntime | CacheError::InvalidInterval => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache crate.
pub type Result<T> = std::result::Result<T, CacheError>;
