//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and oldest-first eviction.

mod concurrent;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use concurrent::Cache;
pub use entry::Entry;
pub use stats::CacheStats;
pub use store::CacheStore;
