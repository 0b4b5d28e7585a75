//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_items: usize,
    /// Memory ceiling in MB before eviction kicks in
    pub max_memory_mb: u64,
    /// Background expiry sweep interval in seconds
    pub sweep_interval: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ITEMS` - Maximum cache entries (default: 10000)
    /// - `MAX_MEMORY_MB` - Memory ceiling in MB (default: 100)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            max_items: env::var("MAX_ITEMS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            max_memory_mb: env::var("MAX_MEMORY_MB")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_items: 10_000,
            max_memory_mb: 100,
            sweep_interval: 300,
            server_port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_items, 10_000);
        assert_eq!(config.max_memory_mb, 100);
        assert_eq!(config.sweep_interval, 300);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("MAX_ITEMS");
        env::remove_var("MAX_MEMORY_MB");
        env::remove_var("SWEEP_INTERVAL");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.max_items, 10_000);
        assert_eq!(config.max_memory_mb, 100);
        assert_eq!(config.sweep_interval, 300);
        assert_eq!(config.server_port, 3000);
    }
}
