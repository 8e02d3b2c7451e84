//! Background Tasks Module
//!
//! Optional maintenance tasks that run alongside the cache.

mod sweep;

pub use sweep::spawn_sweep_task;
