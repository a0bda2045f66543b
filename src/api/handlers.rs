//! API Handlers
//!
//! HTTP request handlers for the tracker endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use tokio::sync::RwLock;
use tracing::info;

use crate::aggregator;
use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{HealthResponse, LiveQuery, LiveResponse, LiveStreamRecord, StatsResponse};
use crate::query;
use crate::youtube::StreamSource;

/// Placeholder value shipped in the sample env file; treated the same
/// as a missing key.
pub const API_KEY_PLACEHOLDER: &str = "your_youtube_api_key_here";

// == App State ==
/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache of aggregated results, keyed by term set
    pub cache: Arc<RwLock<TtlCache<Vec<LiveStreamRecord>>>>,
    /// Server configuration
    pub config: Arc<Config>,
    /// Upstream search implementation
    pub source: Arc<dyn StreamSource>,
}

impl AppState {
    /// Creates a new AppState around a configuration and an upstream
    /// source.
    pub fn new(config: Config, source: Arc<dyn StreamSource>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(TtlCache::new())),
            config: Arc::new(config),
            source,
        }
    }
}

// == Live Handler ==
/// Handler for GET /api/live
///
/// Serves the cached aggregation for the requested term set when it is
/// still fresh; otherwise validates the credential, runs the full
/// search pipeline and caches whatever it produced. An empty result is
/// valid and cacheable; only a run in which every term failed is
/// surfaced as an error.
pub async fn live_handler(
    State(state): State<AppState>,
    Query(params): Query<LiveQuery>,
) -> Result<Json<LiveResponse>> {
    let terms = query::resolve_terms(params.hashtags.as_deref(), &state.config.hashtags);
    let key = query::cache_key(&terms);

    // get() needs a write lock: lazy expiry mutates the map.
    if let Some(streams) = state.cache.write().await.get(&key) {
        return Ok(Json(LiveResponse::new(streams, true)));
    }

    let api_key = state
        .config
        .youtube_api_key
        .as_deref()
        .filter(|key| *key != API_KEY_PLACEHOLDER)
        .ok_or(ApiError::Configuration)?;

    let aggregation = aggregator::aggregate(state.source.as_ref(), api_key, &terms).await;

    if aggregation.streams.is_empty() {
        if let Some(failure) = aggregation.total_failure() {
            return Err(ApiError::classify(failure));
        }
    }

    info!(
        "aggregated {} live streams for key {}",
        aggregation.streams.len(),
        key
    );

    state.cache.write().await.set(
        key,
        aggregation.streams.clone(),
        state.config.cache_duration_ms,
    );

    Ok(Json(LiveResponse::new(aggregation.streams, false)))
}

// == Health Handler ==
/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

// == Stats Handler ==
/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::from_stats(&cache.stats()))
}
