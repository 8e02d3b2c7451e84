//! Cache Entry Module
//!
//! Defines the immutable value wrapper stored for every key.

use chrono::{DateTime, TimeDelta, Utc};

// == Cache Entry ==
/// A stored value together with the instant it was inserted.
///
/// Entries are never mutated after construction; an entry leaves the cache
/// by sweep, by a `get` that observes its expiry, or by capacity eviction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
    value: V,
    created_at: DateTime<Utc>,
}

impl<V> Entry<V> {
    // == Constructor ==
    /// Wraps `value`, stamping it with `created_at`.
    pub fn new(value: V, created_at: DateTime<Utc>) -> Self {
        Self { value, created_at }
    }

    /// Returns the stored value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the insertion instant.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Consumes the entry, yielding the stored value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Time elapsed since insertion. Negative if the clock went backwards.
    pub fn age(&self, now: DateTime<Utc>) -> TimeDelta {
        now.signed_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl`.
    ///
    /// Boundary condition: an entry exactly `ttl` old is still live; it
    /// expires only once its age is strictly greater than `ttl`.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        self.age(now) > ttl
    }
}
