//! YouTube Data API wire format
//!
//! Serde DTOs for the two calls the tracker makes: live search and
//! batched video detail lookup. Only the fields the pipeline reads are
//! modeled; everything else in the upstream payload is ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;

// == Search ==
/// Body of a `search.list` response.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
}

/// Search results for non-video resources carry no video id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    pub video_id: Option<String>,
}

// == Video Details ==
/// Body of a `videos.list` response.
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

/// One enriched video record.
///
/// `live_streaming_details` is only present while the video is
/// broadcasting live; its presence is the live/not-live signal.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: String,
    pub snippet: Option<Snippet>,
    pub live_streaming_details: Option<LiveStreamingDetails>,
    pub statistics: Option<Statistics>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: Option<String>,
    pub channel_title: Option<String>,
    pub channel_id: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub thumbnails: Option<Thumbnails>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
    pub high: Option<Thumbnail>,
    pub default: Option<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStreamingDetails {
    /// Live concurrent viewer count, as a decimal string
    pub concurrent_viewers: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Lifetime view count, as a decimal string
    pub view_count: Option<String>,
}

// == Error Body ==
/// Envelope the API wraps failures in: `{"error": {"message": ...}}`.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}
