//! Fixed-window admission checks
//!
//! A [`RateLimiter`] carries the scope name and window settings for one rule
//! and shares its counter store with every other limiter in the process.

use super::store::{epoch_ms, RateLimitStore};
use super::types::RateLimitDecision;
use std::sync::Arc;
use tracing::debug;

/// Admission control for a single rate limit scope.
#[derive(Clone)]
pub struct RateLimiter {
    /// Rule name, part of every counter key
    scope: String,
    /// Maximum requests admitted per window
    limit: u32,
    /// Window length in milliseconds
    window_ms: u64,
    /// Process-wide counter store
    store: Arc<RateLimitStore>,
}

impl RateLimiter {
    /// Create a limiter for `scope` backed by a shared store.
    pub fn new<S: Into<String>>(
        scope: S,
        limit: u32,
        window_ms: u64,
        store: Arc<RateLimitStore>,
    ) -> Self {
        Self {
            scope: scope.into(),
            limit,
            window_ms,
            store,
        }
    }

    /// Count one request from `identifier` on `path` and decide whether it
    /// may proceed.
    ///
    /// Rejected requests still consume the window: a client that keeps
    /// retrying while over the limit does not get an earlier reset.
    pub fn check_and_record(&self, identifier: &str, path: &str) -> RateLimitDecision {
        self.store.maybe_sweep();

        let key = self.key(identifier, path);
        let entry = self.store.record(&key, self.window_ms);

        let current_count = entry.count;
        let allowed = current_count <= self.limit;
        let remaining = self.limit.saturating_sub(current_count);
        let reset_at_secs = entry.window_reset_at / 1000;

        let retry_after_secs = if allowed {
            None
        } else {
            let wait_ms = entry.window_reset_at.saturating_sub(epoch_ms());
            let retry_after = wait_ms.div_ceil(1000).max(1);
            debug!(
                "Rate limit exceeded for {}: {} of {} requests, retry after {}s",
                key, current_count, self.limit, retry_after
            );
            Some(retry_after)
        };

        RateLimitDecision {
            allowed,
            current_count,
            limit: self.limit,
            remaining,
            reset_at_secs,
            retry_after_secs,
        }
    }

    /// Counter key for one client on one route.
    fn key(&self, identifier: &str, path: &str) -> String {
        format!("{}:{}:{}", self.scope, identifier, path)
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }
}
