//! Livetrack - hashtag-driven live stream tracker
//!
//! # Startup Sequence
//! 1. Load `.env` and initialize the tracing subscriber
//! 2. Load configuration from environment variables
//! 3. Create application state with cache and YouTube client
//! 4. Start the background cache sweep task
//! 5. Create the Axum router with all endpoints
//! 6. Start the HTTP server on the configured port
//! 7. Handle graceful shutdown on SIGINT/SIGTERM

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use livetrack::api::{create_router, API_KEY_PLACEHOLDER};
use livetrack::youtube::YouTubeClient;
use livetrack::{spawn_cleanup_task, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "livetrack=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Live Stream Tracker");

    let config = Config::from_env();
    info!(
        "Configuration loaded: hashtags={:?}, cache_duration={}ms, port={}, cleanup_interval={}s",
        config.hashtags, config.cache_duration_ms, config.server_port, config.cleanup_interval
    );

    if config
        .youtube_api_key
        .as_deref()
        .map_or(true, |key| key == API_KEY_PLACEHOLDER)
    {
        warn!("YOUTUBE_API_KEY not configured; /api/live will report a configuration error");
    }

    let server_port = config.server_port;
    let cleanup_interval = config.cleanup_interval;

    let state = AppState::new(config, Arc::new(YouTubeClient::new()));
    info!("Cache store initialized");

    // Start background sweep task
    let cleanup_handle = spawn_cleanup_task(state.cache.clone(), cleanup_interval);

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweep task so its timer does not
/// outlive the server.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    // Abort the sweep task
    cleanup_handle.abort();
    warn!("Cleanup task aborted");
}
