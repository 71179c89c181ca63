//! API Handlers
//!
//! HTTP request handlers that adapt the cache driver interface to HTTP.
//! Values are raw request/response bodies; everything else is JSON.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::driver::CacheDriver;
use crate::engine::CacheEngine;
use crate::error::{CacheError, Result};
use crate::models::{ForgetResponse, HealthResponse, SetQuery, SetResponse, StatsResponse};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The shared cache engine
    pub cache: Arc<CacheEngine>,
}

impl AppState {
    /// Creates a new AppState around an initialized engine.
    pub fn new(cache: Arc<CacheEngine>) -> Self {
        Self { cache }
    }
}

/// Handler for GET /cache/:key
///
/// Returns the stored bytes as `application/octet-stream`.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response> {
    let value = CacheDriver::get(state.cache.as_ref(), &key).ok_or(CacheError::NotFound(key))?;

    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], value).into_response())
}

/// Handler for PUT /cache/:key?ttl=<seconds>
///
/// Stores the raw request body under `key`.
pub async fn set_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<SetQuery>,
    body: Bytes,
) -> Json<SetResponse> {
    CacheDriver::set(state.cache.as_ref(), &key, &body, query.ttl);

    Json(SetResponse::new(key))
}

/// Handler for DELETE /cache/:key
///
/// Succeeds whether or not the key existed.
pub async fn forget_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<ForgetResponse> {
    state.cache.forget(&key);

    Json(ForgetResponse::new(key))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
