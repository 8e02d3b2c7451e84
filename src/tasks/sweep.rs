//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries. Expiry is
//! already enforced lazily on every access; this only reclaims memory held by
//! entries nobody reads again.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Cache;
use crate::clock::Clock;

/// Spawns a background task that sweeps expired entries every `interval`.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(Cache::<String>::new(Duration::from_secs(300), 1000));
/// let sweep_handle = spawn_sweep_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task<V, C>(cache: Arc<Cache<V, C>>, interval: Duration) -> JoinHandle<()>
where
    V: Send + 'static,
    C: Clock + 'static,
{
    tokio::spawn(async move {
        info!("Starting TTL sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired();

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    #[tokio::test(start_paused = true)]
    async fn test_sweep_task_removes_expired_entries() {
        let clock = ManualClock::default();
        let cache = Arc::new(Cache::with_clock(Duration::from_secs(2), 10, clock.clone()));
        cache.save("expire_soon", "value".to_string()).unwrap();

        clock.advance(Duration::from_secs(3));
        let handle = spawn_sweep_task(cache.clone(), Duration::from_millis(10));

        tokio::time::sleep(Duration::from_millis(200)).await;
        handle.abort();

        assert!(cache.is_empty(), "Expired entry should have been swept");
        assert_eq!(cache.stats().expirations, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_task_preserves_valid_entries() {
        let clock = ManualClock::default();
        let cache = Arc::new(Cache::with_clock(Duration::from_secs(2), 10, clock.clone()));
        cache.save("long_lived", "value".to_string()).unwrap();

        let handle = spawn_sweep_task(cache.clone(), Duration::from_millis(10));

        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.abort();

        assert_eq!(cache.get("long_lived").unwrap(), "value");
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_task_waits_one_interval() {
        let clock = ManualClock::default();
        let cache = Arc::new(Cache::with_clock(Duration::from_secs(2), 10, clock.clone()));
        cache.save("expired", "value".to_string()).unwrap();
        clock.advance(Duration::from_secs(3));

        let handle = spawn_sweep_task(cache.clone(), Duration::from_secs(60));

        tokio::time::sleep(Duration::from_secs(59)).await;
        assert_eq!(cache.len(), 1, "No sweep before the first interval");

        tokio::time::sleep(Duration::from_secs(2)).await;
        handle.abort();

        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let cache = Arc::new(Cache::<String>::new(Duration::from_secs(60), 10));

        let handle = spawn_sweep_task(cache, Duration::from_millis(10));
        handle.abort();

        let result = handle.await;
        assert!(result.unwrap_err().is_cancelled());
    }
}
