//! Aggregation Pipeline
//!
//! Drives the upstream adapter once per query term, filters the
//! enriched results down to currently live items, deduplicates across
//! terms and normalizes everything into the canonical record shape.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::UpstreamError;
use crate::models::LiveStreamRecord;
use crate::youtube::wire::VideoItem;
use crate::youtube::{StreamSource, INTER_TERM_DELAY};

// == Term Outcome ==
/// What happened to a single query term during one aggregation run.
#[derive(Debug)]
pub struct TermOutcome {
    pub term: String,
    pub status: TermStatus,
}

#[derive(Debug)]
pub enum TermStatus {
    /// The term was searched; `matched` counts the records it
    /// contributed after the live filter and dedup
    Fetched { matched: usize },
    /// Search or detail fetch failed and the term was skipped
    Failed(UpstreamError),
}

// == Aggregation ==
/// Result of one aggregation run.
///
/// The outcome list lets the caller tell "no live matches" apart from
/// "every term failed"; the record list alone cannot.
#[derive(Debug)]
pub struct Aggregation {
    /// Records in term order, then within-term response order. No sort
    /// is imposed here; ordering for display is the client's concern.
    pub streams: Vec<LiveStreamRecord>,
    pub outcomes: Vec<TermOutcome>,
}

impl Aggregation {
    /// Returns the first upstream failure when at least one term was
    /// attempted and every single one failed, `None` otherwise.
    pub fn total_failure(&self) -> Option<&UpstreamError> {
        let all_failed = !self.outcomes.is_empty()
            && self
                .outcomes
                .iter()
                .all(|outcome| matches!(outcome.status, TermStatus::Failed(_)));
        if !all_failed {
            return None;
        }

        self.outcomes.iter().find_map(|outcome| match &outcome.status {
            TermStatus::Failed(error) => Some(error),
            TermStatus::Fetched { .. } => None,
        })
    }
}

// == Aggregate ==
/// Runs the full search pipeline for `terms`.
///
/// Terms are processed sequentially on purpose: the inter-term pause
/// keeps the request rate under the upstream quota, and parallel
/// fan-out would defeat it. A failing term is logged and skipped; it
/// never aborts the run.
///
/// A detail record is included iff it still carries live streaming
/// metadata (a record found by search but missing it by detail time
/// has gone offline) and its id was not already contributed by an
/// earlier term.
pub async fn aggregate<S: StreamSource + ?Sized>(
    source: &S,
    api_key: &str,
    terms: &[String],
) -> Aggregation {
    let mut streams = Vec::new();
    let mut outcomes = Vec::with_capacity(terms.len());
    let mut seen_ids: HashSet<String> = HashSet::new();

    for term in terms {
        match fetch_term(source, api_key, term).await {
            Ok(videos) => {
                let mut matched = 0;
                for video in videos {
                    if video.live_streaming_details.is_none() {
                        continue;
                    }
                    if !seen_ids.insert(video.id.clone()) {
                        continue;
                    }
                    streams.push(LiveStreamRecord::from_video(video));
                    matched += 1;
                }
                debug!("term {:?} contributed {} live streams", term, matched);
                outcomes.push(TermOutcome {
                    term: term.clone(),
                    status: TermStatus::Fetched { matched },
                });
            }
            Err(error) => {
                warn!("skipping term {:?}: {}", term, error);
                outcomes.push(TermOutcome {
                    term: term.clone(),
                    status: TermStatus::Failed(error),
                });
            }
        }

        tokio::time::sleep(INTER_TERM_DELAY).await;
    }

    Aggregation { streams, outcomes }
}

/// Search plus batched detail fetch for one term.
async fn fetch_term<S: StreamSource + ?Sized>(
    source: &S,
    api_key: &str,
    term: &str,
) -> Result<Vec<VideoItem>, UpstreamError> {
    let ids = source.search_live(api_key, term).await?;
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    source.video_details(api_key, &ids).await
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::wire::{LiveStreamingDetails, Snippet};
    use async_trait::async_trait;
    use std::collections::HashMap;

    // == Stub Source ==
    /// Scripted source: per-term id lists, a shared detail store, and
    /// terms that fail with a given status.
    #[derive(Default)]
    struct StubSource {
        search: HashMap<String, Vec<String>>,
        videos: HashMap<String, VideoItem>,
        failing_terms: HashMap<String, u16>,
    }

    impl StubSource {
        fn with_search(mut self, term: &str, ids: &[&str]) -> Self {
            self.search
                .insert(term.to_string(), ids.iter().map(|s| s.to_string()).collect());
            self
        }

        fn with_video(mut self, video: VideoItem) -> Self {
            self.videos.insert(video.id.clone(), video);
            self
        }

        fn with_failing_term(mut self, term: &str, status: u16) -> Self {
            self.failing_terms.insert(term.to_string(), status);
            self
        }
    }

    #[async_trait]
    impl StreamSource for StubSource {
        async fn search_live(
            &self,
            _api_key: &str,
            term: &str,
        ) -> Result<Vec<String>, UpstreamError> {
            if let Some(status) = self.failing_terms.get(term) {
                return Err(UpstreamError::Status {
                    status: *status,
                    message: None,
                });
            }
            Ok(self.search.get(term).cloned().unwrap_or_default())
        }

        async fn video_details(
            &self,
            _api_key: &str,
            ids: &[String],
        ) -> Result<Vec<VideoItem>, UpstreamError> {
            Ok(ids
                .iter()
                .filter_map(|id| self.videos.get(id).cloned())
                .collect())
        }
    }

    fn live_video(id: &str) -> VideoItem {
        VideoItem {
            id: id.to_string(),
            snippet: Some(Snippet {
                title: Some(format!("{} title", id)),
                ..Default::default()
            }),
            live_streaming_details: Some(LiveStreamingDetails::default()),
            statistics: None,
        }
    }

    fn offline_video(id: &str) -> VideoItem {
        VideoItem {
            id: id.to_string(),
            snippet: None,
            live_streaming_details: None,
            statistics: None,
        }
    }

    fn terms(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[tokio::test]
    async fn test_dedup_across_terms() {
        let source = StubSource::default()
            .with_search("#a", &["shared", "only_a"])
            .with_search("#b", &["shared", "only_b"])
            .with_video(live_video("shared"))
            .with_video(live_video("only_a"))
            .with_video(live_video("only_b"));

        let result = aggregate(&source, "key", &terms(&["#a", "#b"])).await;

        let ids: Vec<_> = result.streams.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["shared", "only_a", "only_b"]);
    }

    #[tokio::test]
    async fn test_live_only_filter() {
        let source = StubSource::default()
            .with_search("#a", &["live1", "gone"])
            .with_video(live_video("live1"))
            .with_video(offline_video("gone"));

        let result = aggregate(&source, "key", &terms(&["#a"])).await;

        assert_eq!(result.streams.len(), 1);
        assert_eq!(result.streams[0].id, "live1");
    }

    #[tokio::test]
    async fn test_partial_failure_is_tolerated() {
        let source = StubSource::default()
            .with_failing_term("#broken", 500)
            .with_search("#ok", &["vid1"])
            .with_video(live_video("vid1"));

        let result = aggregate(&source, "key", &terms(&["#broken", "#ok"])).await;

        assert_eq!(result.streams.len(), 1);
        assert_eq!(result.streams[0].id, "vid1");
        assert!(result.total_failure().is_none());
        assert!(matches!(
            result.outcomes[0].status,
            TermStatus::Failed(UpstreamError::Status { status: 500, .. })
        ));
        assert!(matches!(
            result.outcomes[1].status,
            TermStatus::Fetched { matched: 1 }
        ));
    }

    #[tokio::test]
    async fn test_total_failure_detected() {
        let source = StubSource::default()
            .with_failing_term("#a", 403)
            .with_failing_term("#b", 403);

        let result = aggregate(&source, "key", &terms(&["#a", "#b"])).await;

        assert!(result.streams.is_empty());
        assert!(matches!(
            result.total_failure(),
            Some(UpstreamError::Status { status: 403, .. })
        ));
    }

    #[tokio::test]
    async fn test_no_matches_is_not_a_failure() {
        let source = StubSource::default().with_search("#quiet", &[]);

        let result = aggregate(&source, "key", &terms(&["#quiet"])).await;

        assert!(result.streams.is_empty());
        assert!(result.total_failure().is_none());
        assert!(matches!(
            result.outcomes[0].status,
            TermStatus::Fetched { matched: 0 }
        ));
    }

    #[tokio::test]
    async fn test_end_to_end_normalization() {
        let video = VideoItem {
            id: "abc123".to_string(),
            snippet: Some(Snippet {
                title: Some("Test Stream".to_string()),
                ..Default::default()
            }),
            live_streaming_details: Some(LiveStreamingDetails {
                concurrent_viewers: Some("42".to_string()),
            }),
            statistics: None,
        };
        let source = StubSource::default()
            .with_search("#gtarp", &["abc123"])
            .with_video(video);

        let result = aggregate(&source, "key", &terms(&["#gtarp"])).await;

        assert_eq!(result.streams.len(), 1);
        let record = &result.streams[0];
        assert_eq!(record.id, "abc123");
        assert_eq!(record.title, "Test Stream");
        assert_eq!(record.channel_name, "Unknown Channel");
        assert_eq!(record.thumbnail_url, "");
        assert_eq!(record.viewer_count, 42);
        assert_eq!(record.watch_url, "https://www.youtube.com/watch?v=abc123");
    }
}
