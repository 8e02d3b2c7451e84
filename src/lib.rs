//! Bounded Cache - a concurrency-safe key-value cache
//!
//! Every entry carries a fixed time-to-live and the cache holds at most a
//! fixed number of entries, evicting the oldest-created entry when full.
//! The optional HTTP surface exposes one shared cache over axum.

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::Cache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_sweep_task;
