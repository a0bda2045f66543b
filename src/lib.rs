//! Livetrack - hashtag-driven live stream tracker
//!
//! Aggregates currently live YouTube streams for a configurable set of
//! hashtags, deduplicates them across searches and serves the merged
//! result through a TTL-cached HTTP endpoint.

pub mod aggregator;
pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod tasks;
pub mod youtube;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
