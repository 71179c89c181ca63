//! API Module
//!
//! HTTP binding over the cache driver interface.
//!
//! # Endpoints
//! - `GET /cache/:key` - Retrieve a value as raw bytes
//! - `PUT /cache/:key?ttl=N` - Store the request body
//! - `DELETE /cache/:key` - Forget a key
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
