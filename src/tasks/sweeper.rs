//! Expiry Sweeper Task
//!
//! Background task that periodically removes expired cache entries,
//! independent of request traffic. The sweeper never evicts for
//! capacity or memory pressure — expiry only.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Keys removed per write-lock hold, so a large expired backlog never
/// starves foreground operations.
const SWEEP_BATCH_SIZE: usize = 128;

/// Spawns the background expiry sweeper.
///
/// Each round scans for expired keys under a read lock, then deletes
/// them in bounded batches under short write locks, re-checking expiry
/// in case a key was overwritten in between.
///
/// # Arguments
/// * `cache` - Shared cache store
/// * `sweep_interval_secs` - Seconds between sweep rounds
///
/// # Returns
/// A JoinHandle used to abort the task exactly once during graceful
/// shutdown.
pub fn spawn_sweeper_task<V>(
    cache: Arc<RwLock<CacheStore<V>>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expiry sweeper with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let expired = {
                let cache_guard = cache.read().await;
                cache_guard.expired_keys()
            };

            if expired.is_empty() {
                debug!("expiry sweep: nothing to remove");
                continue;
            }

            let mut removed = 0;
            for batch in expired.chunks(SWEEP_BATCH_SIZE) {
                let mut cache_guard = cache.write().await;
                removed += cache_guard.remove_expired_batch(batch);
            }

            info!("expiry sweep: removed {} expired entries", removed);
        }
    })
}
