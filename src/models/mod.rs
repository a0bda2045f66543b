//! Request and Response models for the tracker API
//!
//! This module defines the canonical stream record plus the DTOs used
//! for serializing HTTP request and response bodies.

pub mod requests;
pub mod responses;
pub mod stream;

// Re-export commonly used types
pub use requests::LiveQuery;
pub use responses::{HealthResponse, LiveResponse, StatsResponse};
pub use stream::LiveStreamRecord;
