//! Cache Store Module
//!
//! The unsynchronized cache engine: HashMap storage with TTL expiration and
//! oldest-first capacity eviction. Every time-dependent call takes `now`
//! explicitly; locking and clock reads belong to [`crate::cache::Cache`].

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use crate::cache::{CacheStats, Entry};
use crate::clock::to_time_delta;
use crate::error::{CacheError, Result};

/// An entry plus its insertion sequence, used to order entries that share a
/// creation instant.
#[derive(Debug)]
struct Slot<V> {
    entry: Entry<V>,
    sequence: u64,
}

// == Cache Store ==
/// Main cache storage with TTL expiry and oldest-first eviction.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, Slot<V>>,
    /// Activity counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Maximum age of an entry
    ttl: Duration,
    ttl_delta: TimeDelta,
    /// Sequence number handed to the next inserted entry
    next_sequence: u64,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `ttl` - Maximum age of any entry
    /// * `capacity` - Maximum number of entries; 0 stores nothing
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            capacity,
            ttl,
            ttl_delta: to_time_delta(ttl),
            next_sequence: 0,
        }
    }

    // == Save ==
    /// Inserts a new key.
    ///
    /// Fails with `DuplicateKey` if the key is present, even when its entry
    /// has expired but has not been swept yet. Otherwise expired entries are
    /// swept, the oldest live entry is evicted if the store is full, and the
    /// new entry is inserted stamped with `now`.
    ///
    /// With a capacity of 0 the value is accepted and immediately evicted.
    pub fn save(&mut self, key: String, value: V, now: DateTime<Utc>) -> Result<()> {
        if self.entries.contains_key(&key) {
            return Err(CacheError::DuplicateKey(key));
        }

        self.purge_expired(now);

        if self.capacity == 0 {
            self.stats.record_eviction();
            return Ok(());
        }

        if self.entries.len() >= self.capacity {
            if let Some(victim) = self.oldest_key() {
                self.entries.remove(&victim);
                self.stats.record_eviction();
            }
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.entries.insert(
            key,
            Slot {
                entry: Entry::new(value, now),
                sequence,
            },
        );

        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// An expired entry is removed and reported as `Expired`; a later call
    /// for the same key reports `NotFound`. Reading never refreshes an
    /// entry's age or eviction position.
    pub fn get(&mut self, key: &str, now: DateTime<Utc>) -> Result<&V> {
        let expired = match self.entries.get(key) {
            Some(slot) => slot.entry.is_expired(now, self.ttl_delta),
            None => {
                self.stats.record_miss();
                return Err(CacheError::NotFound(key.to_string()));
            }
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            return Err(CacheError::Expired(key.to_string()));
        }

        self.stats.record_hit();
        self.entries
            .get(key)
            .map(|slot| slot.entry.value())
            .ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    // == Remove ==
    /// Removes an entry by key, returning its value whether or not it has
    /// expired.
    pub fn remove(&mut self, key: &str) -> Result<V> {
        let slot = self
            .entries
            .remove(key)
            .ok_or_else(|| CacheError::NotFound(key.to_string()))?;
        Ok(slot.entry.into_value())
    }

    // == Purge Expired ==
    /// Removes every entry older than the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let ttl = self.ttl_delta;
        let before = self.entries.len();
        self.entries.retain(|_, slot| !slot.entry.is_expired(now, ttl));

        let removed = before - self.entries.len();
        self.stats.record_expirations(removed);
        removed
    }

    /// Key of the entry with the smallest `(created_at, sequence)`.
    fn oldest_key(&self) -> Option<String> {
        self.entries
            .iter()
            .min_by_key(|(_, slot)| (slot.entry.created_at(), slot.sequence))
            .map(|(key, _)| key.clone())
    }

    /// Returns a snapshot of the activity counters. `total_entries` is
    /// taken from the live map at call time.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
