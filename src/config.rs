//! Configuration Module
//!
//! Handles loading gateway configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::cache::{DEFAULT_MAX_ENTRIES, DEFAULT_TTL_SECONDS};

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of cached generation results
    pub max_entries: usize,
    /// Cache entry time-to-live in seconds
    pub ttl_seconds: u64,
    /// Maximum generation attempts per fetch
    pub max_attempts: u32,
    /// Base retry delay in milliseconds
    pub retry_base_delay_ms: u64,
    /// Retry delay cap in milliseconds
    pub retry_max_delay_ms: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Optional cache snapshot file path (no path = memory-only cache)
    pub snapshot_path: Option<PathBuf>,
    /// Upstream generation endpoint URL
    pub generator_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_ENTRIES` - Maximum cached results (default: 50)
    /// - `CACHE_TTL_SECONDS` - Entry TTL in seconds (default: 86400, 24h)
    /// - `MAX_ATTEMPTS` - Generation attempts per fetch (default: 3)
    /// - `RETRY_BASE_DELAY_MS` - Base backoff delay (default: 1000)
    /// - `RETRY_MAX_DELAY_MS` - Backoff delay cap (default: 10000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SNAPSHOT_PATH` - Cache snapshot file (default: unset)
    /// - `GENERATOR_URL` - Upstream generation endpoint
    pub fn from_env() -> Self {
        Self {
            max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_ENTRIES),
            ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECONDS),
            max_attempts: env::var("MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            retry_base_delay_ms: env::var("RETRY_BASE_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1_000),
            retry_max_delay_ms: env::var("RETRY_MAX_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            snapshot_path: env::var("SNAPSHOT_PATH").ok().map(PathBuf::from),
            generator_url: env::var("GENERATOR_URL")
                .unwrap_or_else(|_| "http://localhost:8787/generate".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            ttl_seconds: DEFAULT_TTL_SECONDS,
            max_attempts: 3,
            retry_base_delay_ms: 1_000,
            retry_max_delay_ms: 10_000,
            server_port: 3000,
            snapshot_path: None,
            generator_url: "http://localhost:8787/generate".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_entries, 50);
        assert_eq!(config.ttl_seconds, 86_400);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.retry_base_delay_ms, 1_000);
        assert_eq!(config.retry_max_delay_ms, 10_000);
        assert_eq!(config.server_port, 3000);
        assert!(config.snapshot_path.is_none());
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_MAX_ENTRIES");
        env::remove_var("CACHE_TTL_SECONDS");
        env::remove_var("MAX_ATTEMPTS");
        env::remove_var("RETRY_BASE_DELAY_MS");
        env::remove_var("RETRY_MAX_DELAY_MS");
        env::remove_var("SERVER_PORT");
        env::remove_var("SNAPSHOT_PATH");

        let config = Config::from_env();
        assert_eq!(config.max_entries, 50);
        assert_eq!(config.ttl_seconds, 86_400);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.server_port, 3000);
        assert!(config.snapshot_path.is_none());
    }
}
