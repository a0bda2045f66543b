//! Error types for the live stream tracker
//!
//! `UpstreamError` is what the YouTube adapter produces; `ApiError` is
//! the boundary taxonomy serialized to HTTP callers, including the
//! classification of upstream failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Upstream Error ==
/// A failed call against the upstream video platform.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Upstream answered with a non-success HTTP status
    #[error("upstream responded with status {status}")]
    Status {
        status: u16,
        /// Detail message from the upstream error body, if any
        message: Option<String>,
    },

    /// The request never produced a usable response
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

// == API Error ==
/// Boundary error taxonomy served to HTTP clients.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The credential is missing or still the sample placeholder
    #[error("YouTube API key not configured")]
    Configuration,

    /// Upstream refused the credential or the quota is exhausted
    #[error("API quota exceeded or invalid API key")]
    QuotaOrAuth,

    /// Upstream rejected the request as malformed
    #[error("invalid request: {0}")]
    BadRequest(String),

    /// Anything else: network failure, timeout, unexpected shape
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl ApiError {
    // == Classifier ==
    /// Maps an upstream failure onto the boundary taxonomy.
    ///
    /// 403 means quota or credential trouble, 400 a malformed request
    /// (keeping the upstream detail when it supplied one), everything
    /// else is unknown.
    pub fn classify(error: &UpstreamError) -> Self {
        match error {
            UpstreamError::Status { status: 403, .. } => ApiError::QuotaOrAuth,
            UpstreamError::Status { status: 400, message } => ApiError::BadRequest(
                message
                    .clone()
                    .unwrap_or_else(|| "Bad request to YouTube API".to_string()),
            ),
            other => ApiError::Unknown(other.to_string()),
        }
    }

    /// HTTP status hint for this error kind.
    fn status_hint(&self) -> StatusCode {
        match self {
            ApiError::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::QuotaOrAuth => StatusCode::FORBIDDEN,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short error label used in the response envelope.
    fn summary(&self) -> &'static str {
        match self {
            ApiError::Configuration => "YouTube API key not configured",
            ApiError::QuotaOrAuth => "API quota exceeded or invalid API key",
            ApiError::BadRequest(_) => "Invalid request",
            ApiError::Unknown(_) => "Unknown error",
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_hint();
        let message = match &self {
            ApiError::Configuration => {
                "Please set YOUTUBE_API_KEY in your .env file".to_string()
            }
            ApiError::QuotaOrAuth => {
                "Please check your YouTube API key and quota limits".to_string()
            }
            ApiError::BadRequest(msg) | ApiError::Unknown(msg) => msg.clone(),
        };

        let body = Json(json!({
            "success": false,
            "error": self.summary(),
            "message": message,
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP layer.
pub type Result<T> = std::result::Result<T, ApiError>;
