//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// TTL in seconds applied to every entry
    pub entry_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweep interval in seconds, 0 disables the sweep task
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Cache capacity (default: 1000)
    /// - `ENTRY_TTL` - Entry TTL in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds, 0 = off (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: env_or("MAX_ENTRIES", defaults.max_entries),
            entry_ttl: env_or("ENTRY_TTL", defaults.entry_ttl),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            sweep_interval: env_or("SWEEP_INTERVAL", defaults.sweep_interval),
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.entry_ttl)
    }

    /// Sweep period, or `None` when the background sweep is disabled.
    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval > 0).then(|| Duration::from_secs(self.sweep_interval))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            entry_ttl: 300,
            server_port: 3000,
            sweep_interval: 1,
        }
    }
}

/// Parses `name` from the environment, falling back to `default` when the
/// variable is unset or malformed.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.entry_ttl, 300);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.sweep_interval, 1);
        assert_eq!(config.ttl(), Duration::from_secs(300));
    }

    #[test]
    fn test_sweep_interval_disabled() {
        let config = Config {
            sweep_interval: 0,
            ..Config::default()
        };
        assert_eq!(config.sweep_interval(), None);
        assert_eq!(
            Config::default().sweep_interval(),
            Some(Duration::from_secs(1))
        );
    }

    #[test]
    fn test_env_or_fallbacks() {
        // Variable names unique to this test so parallel tests don't interfere
        env::remove_var("BOUNDED_CACHE_TEST_UNSET");
        env::set_var("BOUNDED_CACHE_TEST_BAD", "not-a-number");
        env::set_var("BOUNDED_CACHE_TEST_GOOD", " 42 ");

        assert_eq!(env_or("BOUNDED_CACHE_TEST_UNSET", 7usize), 7);
        assert_eq!(env_or("BOUNDED_CACHE_TEST_BAD", 7usize), 7);
        assert_eq!(env_or("BOUNDED_CACHE_TEST_GOOD", 7usize), 42);
    }
}
