//! YouTube Upstream Module
//!
//! Adapter for the external video platform: wire DTOs plus the
//! two-step search client behind the `StreamSource` trait.

mod client;
pub mod wire;

pub use client::{StreamSource, YouTubeClient, INTER_TERM_DELAY};
