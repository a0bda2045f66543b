//! Cache Sweep Task
//!
//! Background task that periodically removes expired cache entries.
//! Lazy expiry on read already keeps stale values from being served;
//! the sweep bounds memory for keys nothing reads again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::TtlCache;

/// Spawns a background task that periodically purges expired entries.
///
/// The task sleeps for the configured interval between sweeps and
/// takes a write lock only for the purge itself. The returned handle
/// is aborted during graceful shutdown so the timer does not outlive
/// the server.
///
/// # Arguments
/// * `cache` - Shared reference to the cache
/// * `interval_secs` - Interval in seconds between sweeps
pub fn spawn_cleanup_task<T>(
    cache: Arc<RwLock<TtlCache<T>>>,
    interval_secs: u64,
) -> JoinHandle<()>
where
    T: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.purge_expired()
            };

            if removed > 0 {
                info!("Cache sweep removed {} expired entries", removed);
            } else {
                debug!("Cache sweep found no expired entries");
            }
        }
    })
}
