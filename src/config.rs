//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;

use crate::cache::DEFAULT_TTL_MS;
use crate::retry::{DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_DELAY_MS};

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the portfolio backend
    pub backend_endpoint: String,
    /// Default cache TTL in milliseconds
    pub cache_ttl_ms: u64,
    /// Number of attempts for each network fetch
    pub retry_attempts: u32,
    /// Delay between fetch attempts in milliseconds
    pub retry_delay_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `BACKEND_ENDPOINT` - Backend base URL (default: http://localhost:8000)
    /// - `CACHE_TTL_MS` - Default cache TTL in ms (default: 30 days)
    /// - `RETRY_ATTEMPTS` - Fetch attempts per resource (default: 3)
    /// - `RETRY_DELAY_MS` - Delay between attempts in ms (default: 1000)
    pub fn from_env() -> Self {
        Self {
            backend_endpoint: env::var("BACKEND_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            cache_ttl_ms: env::var("CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_MS),
            retry_attempts: env::var("RETRY_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RETRY_ATTEMPTS),
            retry_delay_ms: env::var("RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RETRY_DELAY_MS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_endpoint: "http://localhost:8000".to_string(),
            cache_ttl_ms: DEFAULT_TTL_MS,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
        }
    }
}
