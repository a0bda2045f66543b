//! Canonical Live Stream Record
//!
//! The normalized output unit serialized to API consumers. Field names
//! and fallback values are a compatibility contract; do not rename.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::youtube::wire::VideoItem;

// == Live Stream Record ==
/// One currently live stream, derived from a single upstream detail
/// item. Identity is the `id` field alone; the aggregator guarantees
/// it is unique within a result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStreamRecord {
    pub id: String,
    pub title: String,
    pub channel_name: String,
    pub channel_id: String,
    pub thumbnail_url: String,
    pub viewer_count: u64,
    pub published_at: DateTime<Utc>,
    pub watch_url: String,
    pub tags: Vec<String>,
    pub description: String,
}

impl LiveStreamRecord {
    /// Normalizes one upstream detail item into the canonical shape.
    ///
    /// Missing upstream fields collapse to documented fallbacks rather
    /// than failing the record: placeholder title and channel name,
    /// empty thumbnail/description/tags, zero viewers, current time
    /// for a missing publish timestamp.
    pub fn from_video(video: VideoItem) -> Self {
        let snippet = video.snippet.unwrap_or_default();
        let live = video.live_streaming_details.unwrap_or_default();
        let stats = video.statistics.unwrap_or_default();

        // High resolution thumbnail preferred, default size second.
        let thumbnails = snippet.thumbnails.unwrap_or_default();
        let thumbnail_url = thumbnails
            .high
            .or(thumbnails.default)
            .map(|thumb| thumb.url)
            .unwrap_or_default();

        // Live concurrent viewers win over the lifetime view count;
        // unparseable or absent counts collapse to zero.
        let viewer_count = live
            .concurrent_viewers
            .or(stats.view_count)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0);

        let watch_url = format!("https://www.youtube.com/watch?v={}", video.id);

        Self {
            title: snippet.title.unwrap_or_else(|| "Untitled".to_string()),
            channel_name: snippet
                .channel_title
                .unwrap_or_else(|| "Unknown Channel".to_string()),
            channel_id: snippet.channel_id.unwrap_or_default(),
            thumbnail_url,
            viewer_count,
            published_at: snippet.published_at.unwrap_or_else(Utc::now),
            watch_url,
            tags: snippet.tags.unwrap_or_default(),
            description: snippet.description.unwrap_or_default(),
            id: video.id,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::wire::{LiveStreamingDetails, Snippet, Statistics, Thumbnail, Thumbnails};

    fn bare_video(id: &str) -> VideoItem {
        VideoItem {
            id: id.to_string(),
            snippet: None,
            live_streaming_details: None,
            statistics: None,
        }
    }

    #[test]
    fn test_normalize_applies_fallbacks() {
        let record = LiveStreamRecord::from_video(bare_video("vid1"));

        assert_eq!(record.id, "vid1");
        assert_eq!(record.title, "Untitled");
        assert_eq!(record.channel_name, "Unknown Channel");
        assert_eq!(record.channel_id, "");
        assert_eq!(record.thumbnail_url, "");
        assert_eq!(record.viewer_count, 0);
        assert_eq!(record.watch_url, "https://www.youtube.com/watch?v=vid1");
        assert!(record.tags.is_empty());
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_normalize_prefers_concurrent_viewers() {
        let mut video = bare_video("vid2");
        video.live_streaming_details = Some(LiveStreamingDetails {
            concurrent_viewers: Some("42".to_string()),
        });
        video.statistics = Some(Statistics {
            view_count: Some("9000".to_string()),
        });

        let record = LiveStreamRecord::from_video(video);
        assert_eq!(record.viewer_count, 42);
    }

    #[test]
    fn test_normalize_falls_back_to_view_count() {
        let mut video = bare_video("vid3");
        video.live_streaming_details = Some(LiveStreamingDetails::default());
        video.statistics = Some(Statistics {
            view_count: Some("9000".to_string()),
        });

        let record = LiveStreamRecord::from_video(video);
        assert_eq!(record.viewer_count, 9000);
    }

    #[test]
    fn test_normalize_unparseable_count_is_zero() {
        let mut video = bare_video("vid4");
        video.live_streaming_details = Some(LiveStreamingDetails {
            concurrent_viewers: Some("not-a-number".to_string()),
        });

        let record = LiveStreamRecord::from_video(video);
        assert_eq!(record.viewer_count, 0);
    }

    #[test]
    fn test_normalize_thumbnail_preference() {
        let mut video = bare_video("vid5");
        video.snippet = Some(Snippet {
            thumbnails: Some(Thumbnails {
                high: Some(Thumbnail {
                    url: "https://img/high.jpg".to_string(),
                }),
                default: Some(Thumbnail {
                    url: "https://img/default.jpg".to_string(),
                }),
            }),
            ..Default::default()
        });

        let record = LiveStreamRecord::from_video(video.clone());
        assert_eq!(record.thumbnail_url, "https://img/high.jpg");

        video.snippet = Some(Snippet {
            thumbnails: Some(Thumbnails {
                high: None,
                default: Some(Thumbnail {
                    url: "https://img/default.jpg".to_string(),
                }),
            }),
            ..Default::default()
        });
        let record = LiveStreamRecord::from_video(video);
        assert_eq!(record.thumbnail_url, "https://img/default.jpg");
    }

    #[test]
    fn test_serialized_field_names_are_contract() {
        let record = LiveStreamRecord::from_video(bare_video("vid6"));
        let json = serde_json::to_value(&record).unwrap();

        for field in [
            "id",
            "title",
            "channelName",
            "channelId",
            "thumbnailUrl",
            "viewerCount",
            "publishedAt",
            "watchUrl",
            "tags",
            "description",
        ] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
    }
}
