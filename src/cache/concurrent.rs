//! Concurrent Cache Module
//!
//! Thread-safe handle that owns a [`CacheStore`] behind a single mutex and
//! reads the clock inside the critical section.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::cache::{CacheStats, CacheStore};
use crate::clock::{Clock, SystemClock};
use crate::error::Result;

// == Cache ==
/// A bounded, TTL-expiring cache safe to share between threads.
///
/// Every operation runs start to finish under one lock, so the
/// sweep/evict/insert sequence of [`Cache::save`] and the check/remove
/// sequence of [`Cache::get`] are atomic with respect to each other.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use bounded_cache::Cache;
///
/// let cache: Cache<String> = Cache::new(Duration::from_secs(2), 3);
/// cache.save("k1", "v1".to_string()).unwrap();
/// assert_eq!(cache.get("k1").unwrap(), "v1");
/// assert!(cache.save("k1", "other".to_string()).is_err());
/// ```
#[derive(Debug)]
pub struct Cache<V, C = SystemClock> {
    store: Mutex<CacheStore<V>>,
    clock: C,
    ttl: Duration,
    capacity: usize,
}

impl<V> Cache<V, SystemClock> {
    /// Creates an empty cache timed by the system clock.
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self::with_clock(ttl, capacity, SystemClock)
    }
}

impl<V, C: Clock> Cache<V, C> {
    /// Creates an empty cache timed by `clock`.
    pub fn with_clock(ttl: Duration, capacity: usize, clock: C) -> Self {
        Self {
            store: Mutex::new(CacheStore::new(ttl, capacity)),
            clock,
            ttl,
            capacity,
        }
    }

    // Store operations never leave partial state behind before a panic can
    // occur, so a poisoned lock still guards a consistent store.
    fn lock(&self) -> MutexGuard<'_, CacheStore<V>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts `value` under a key that must not already be present.
    pub fn save(&self, key: impl Into<String>, value: V) -> Result<()> {
        let key = key.into();
        let mut store = self.lock();
        let now = self.clock.now();
        store.save(key, value, now)
    }

    /// Returns a clone of the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<V>
    where
        V: Clone,
    {
        let mut store = self.lock();
        let now = self.clock.now();
        store.get(key, now).cloned()
    }

    /// Removes `key`, returning its value.
    pub fn remove(&self, key: &str) -> Result<V> {
        self.lock().remove(key)
    }

    /// Sweeps every expired entry, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        let mut store = self.lock();
        let now = self.clock.now();
        store.purge_expired(now)
    }

    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    /// Number of stored entries, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
