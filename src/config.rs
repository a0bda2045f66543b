//! Configuration Module
//!
//! Handles loading and managing server configuration from environment
//! variables.

use std::env;

use crate::query;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. The API key is kept optional here and validated at request
/// time so the server can still boot (and serve health checks) without
/// one.
#[derive(Debug, Clone)]
pub struct Config {
    /// YouTube Data API v3 key
    pub youtube_api_key: Option<String>,
    /// Hashtags searched when a request does not supply its own
    pub hashtags: Vec<String>,
    /// Cache TTL in milliseconds
    pub cache_duration_ms: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment
    /// variables.
    ///
    /// # Environment Variables
    /// - `YOUTUBE_API_KEY` - Upstream API credential
    /// - `HASHTAGS` - Comma separated default hashtags
    ///   (default: `#gtarp,#gta,#roleplay,#rp`)
    /// - `CACHE_DURATION` - Cache TTL in milliseconds (default: 30000)
    /// - `PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 300)
    pub fn from_env() -> Self {
        let hashtags = env::var("HASHTAGS")
            .ok()
            .map(|raw| query::parse_terms(&raw))
            .filter(|terms| !terms.is_empty())
            .unwrap_or_else(default_hashtags);

        Self {
            youtube_api_key: env::var("YOUTUBE_API_KEY").ok(),
            hashtags,
            cache_duration_ms: env::var("CACHE_DURATION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30_000),
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            youtube_api_key: None,
            hashtags: default_hashtags(),
            cache_duration_ms: 30_000,
            server_port: 3000,
            cleanup_interval: 300,
        }
    }
}

fn default_hashtags() -> Vec<String> {
    query::DEFAULT_HASHTAGS
        .iter()
        .map(|tag| tag.to_string())
        .collect()
}
