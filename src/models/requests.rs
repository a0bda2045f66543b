//! Request DTOs for the tracker API
//!
//! Defines the query parameters accepted by the live endpoint.

use serde::Deserialize;

/// Query parameters for GET /api/live.
#[derive(Debug, Clone, Deserialize)]
pub struct LiveQuery {
    /// Comma separated hashtag list overriding the configured set
    pub hashtags: Option<String>,
}
