//! Response DTOs for the tracker API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::LiveStreamRecord;

/// Envelope for the live endpoint (GET /api/live)
#[derive(Debug, Clone, Serialize)]
pub struct LiveResponse {
    pub success: bool,
    /// The aggregated live stream records
    pub data: Vec<LiveStreamRecord>,
    /// True when the data came out of the cache
    pub cached: bool,
    pub count: usize,
    /// Response time in ISO 8601 format
    pub timestamp: String,
}

impl LiveResponse {
    /// Creates a success envelope around an aggregated result.
    pub fn new(data: Vec<LiveStreamRecord>, cached: bool) -> Self {
        Self {
            success: true,
            count: data.len(),
            cached,
            timestamp: chrono::Utc::now().to_rfc3339(),
            data,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

impl HealthResponse {
    /// Creates a healthy response with the current timestamp.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            service: "Live Stream Tracker API".to_string(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics.
    pub fn from_stats(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}
