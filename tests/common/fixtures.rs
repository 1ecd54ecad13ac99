//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.
//! All factories create real objects, not mocks.

use promo_gateway::config::models::RouteRuleConfig;
use promo_gateway::core::rate_limiter::{RateLimitStore, RateLimiter};
use promo_gateway::Config;
use std::sync::Arc;

/// Factory for creating gateway configurations
pub struct ConfigFactory;

impl ConfigFactory {
    /// Create a default configuration
    pub fn create() -> Config {
        Config::default()
    }

    /// Create a configuration with the given rate limit rules
    pub fn with_rules(rules: Vec<RouteRuleConfig>) -> Config {
        let mut config = Config::default();
        config.gateway.rate_limit.rules = rules;
        config
    }

    /// Create a configuration pointed at a specific upstream
    pub fn with_upstream(base_url: &str) -> Config {
        let mut config = Config::default();
        config.gateway.upstream.base_url = base_url.to_string();
        config
    }
}

/// Factory for creating rate limiters backed by fresh stores
pub struct LimiterFactory;

impl LimiterFactory {
    /// Create a limiter with its own store and a quiet sweep schedule
    ///
    /// The sweep interval is one hour so no sweep fires mid-test unless a
    /// test asks for one explicitly.
    pub fn create(limit: u32, window_ms: u64) -> RateLimiter {
        RateLimiter::new("default", limit, window_ms, Arc::new(RateLimitStore::new(3_600_000)))
    }

    /// Create a limiter for a named route group on a shared store
    pub fn scoped(scope: &str, limit: u32, window_ms: u64, store: Arc<RateLimitStore>) -> RateLimiter {
        RateLimiter::new(scope, limit, window_ms, store)
    }
}

/// A strict five-per-minute rule guarding the auth routes
pub fn auth_rule() -> RouteRuleConfig {
    RouteRuleConfig {
        scope: "auth".to_string(),
        prefix: "/api/auth".to_string(),
        limit: Some(5),
        window_ms: Some(60_000),
    }
}

/// A looser rule covering the rest of the API
pub fn api_rule() -> RouteRuleConfig {
    RouteRuleConfig {
        scope: "api".to_string(),
        prefix: "/api".to_string(),
        limit: Some(60),
        window_ms: Some(60_000),
    }
}

/// Minimal gateway YAML for file-loading tests
pub fn minimal_yaml() -> &'static str {
    r#"
server:
  host: "127.0.0.1"
  port: 8099
"#
}

/// Full gateway YAML exercising every section
pub fn full_yaml() -> &'static str {
    r#"
server:
  host: "127.0.0.1"
  port: 8099
  timeout: 15
  max_body_size: 1048576
  cors:
    enabled: true
    allowed_origins:
      - "https://app.example.com"
    max_age: 600

upstream:
  base_url: "http://127.0.0.1:3900"
  timeout_secs: 20
  connect_timeout_secs: 5

rate_limit:
  enabled: true
  default_limit: 10
  default_window_ms: 30000
  sweep_interval_ms: 60000
  rules:
    - scope: auth
      prefix: /api/auth
      limit: 5
      window_ms: 60000
    - scope: api
      prefix: /api
"#
}
