//! API Module
//!
//! HTTP handlers and routing for the tracker REST API.
//!
//! # Endpoints
//! - `GET /api/live` - Aggregated live streams for a hashtag set
//! - `GET /health` - Health check endpoint
//! - `GET /stats` - Cache statistics

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
