//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::config::Config;
use crate::core::rate_limiter::RateLimitStore;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// This struct contains shared resources that need to be accessed across
/// multiple request handlers. Every worker sees the same configuration, the
/// same counter store, and the same upstream connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Rate limit counters, shared by every limiter in the process
    pub store: Arc<RateLimitStore>,
    /// HTTP client used for upstream requests
    pub upstream: reqwest::Client,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, store: Arc<RateLimitStore>, upstream: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            store,
            upstream,
        }
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
