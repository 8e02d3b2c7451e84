//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint. Each handler maps
//! onto exactly one cache operation.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::Cache;
use crate::error::{CacheError, Result};
use crate::models::{
    GetResponse, HealthResponse, RemoveResponse, SaveRequest, SaveResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// The cache locks internally, so the state only needs an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<Cache<String>>,
}

impl AppState {
    pub fn new(cache: Cache<String>) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(Cache::new(config.ttl(), config.max_entries))
    }
}

/// Handler for PUT /save
pub async fn save_handler(
    State(state): State<AppState>,
    Json(req): Json<SaveRequest>,
) -> Result<Json<SaveResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    state.cache.save(req.key.clone(), req.value)?;

    Ok(Json(SaveResponse::new(req.key)))
}

/// Handler for GET /get/:key
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state.cache.get(&key)?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for DELETE /del/:key
pub async fn remove_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<RemoveResponse>> {
    state.cache.remove(&key)?;

    Ok(Json(RemoveResponse::new(key)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats();

    Json(StatsResponse::new(
        &stats,
        state.cache.capacity(),
        state.cache.ttl(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
