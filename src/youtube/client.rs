//! Upstream Client Adapter
//!
//! Two-step lookup against the YouTube Data API v3: a per-term live
//! search followed by one batched detail fetch for the returned ids.
//! No retry happens here; the caller owns that policy.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::UpstreamError;
use crate::youtube::wire::{ErrorEnvelope, SearchResponse, VideoItem, VideoListResponse};

// == Constants ==
/// Base URL for the YouTube Data API v3.
const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Pause inserted after each processed term to stay under the upstream
/// rate limit. A policy knob, not a correctness requirement.
pub const INTER_TERM_DELAY: Duration = Duration::from_millis(100);

/// Search results fetched per term.
const MAX_RESULTS: &str = "50";

// == Stream Source Trait ==
/// Upstream search abstraction.
///
/// The aggregator only talks to this trait, so tests substitute a
/// scripted source instead of the network.
#[async_trait]
pub trait StreamSource: Send + Sync {
    /// Searches for currently live videos matching `term`, returning
    /// candidate video ids.
    async fn search_live(&self, api_key: &str, term: &str)
        -> Result<Vec<String>, UpstreamError>;

    /// Fetches enriched detail records for a batch of video ids in one
    /// call.
    async fn video_details(
        &self,
        api_key: &str,
        ids: &[String],
    ) -> Result<Vec<VideoItem>, UpstreamError>;
}

// == YouTube Client ==
/// `StreamSource` backed by the real YouTube Data API.
#[derive(Clone)]
pub struct YouTubeClient {
    http: Client,
}

impl YouTubeClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    /// Decodes a non-success response into an upstream error, keeping
    /// the human readable message from the error body when present.
    async fn error_from_response(response: reqwest::Response) -> UpstreamError {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorEnvelope>()
            .await
            .ok()
            .and_then(|envelope| envelope.error)
            .and_then(|body| body.message);

        UpstreamError::Status { status, message }
    }
}

impl Default for YouTubeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StreamSource for YouTubeClient {
    async fn search_live(
        &self,
        api_key: &str,
        term: &str,
    ) -> Result<Vec<String>, UpstreamError> {
        let response = self
            .http
            .get(format!("{}/search", API_BASE))
            .query(&[
                ("part", "snippet"),
                ("q", term),
                ("type", "video"),
                ("eventType", "live"),
                ("order", "date"),
                ("maxResults", MAX_RESULTS),
                ("key", api_key),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body: SearchResponse = response.json().await?;
        let ids: Vec<String> = body
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect();

        debug!("search for {:?} returned {} candidate ids", term, ids.len());
        Ok(ids)
    }

    async fn video_details(
        &self,
        api_key: &str,
        ids: &[String],
    ) -> Result<Vec<VideoItem>, UpstreamError> {
        let id_list = ids.join(",");
        let response = self
            .http
            .get(format!("{}/videos", API_BASE))
            .query(&[
                ("part", "snippet,liveStreamingDetails,statistics"),
                ("id", id_list.as_str()),
                ("key", api_key),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body: VideoListResponse = response.json().await?;
        Ok(body.items)
    }
}
