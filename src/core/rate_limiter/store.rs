//! Shared counter storage for rate limiting
//!
//! All limiter instances in a process share one store, so rules that use the
//! same scope observe the same counters no matter which worker handled a
//! request. Entries are created lazily and removed in bulk by an
//! opportunistic sweep rather than by a background task.

use super::types::RateLimitEntry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Current Unix time in milliseconds.
pub(crate) fn epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Concurrent map from rate limit keys to their active window counters.
#[derive(Debug)]
pub struct RateLimitStore {
    entries: DashMap<String, RateLimitEntry>,
    /// Minimum time between sweeps (milliseconds)
    sweep_interval_ms: u64,
    /// When the last sweep ran (epoch milliseconds)
    last_sweep_ms: AtomicU64,
}

impl RateLimitStore {
    /// Create an empty store that sweeps at most once per `sweep_interval_ms`.
    pub fn new(sweep_interval_ms: u64) -> Self {
        Self {
            entries: DashMap::new(),
            sweep_interval_ms,
            last_sweep_ms: AtomicU64::new(epoch_ms()),
        }
    }

    /// Count one request against `key` and return the updated counter.
    ///
    /// Starts a fresh window when the key is new or its previous window has
    /// ended. The count goes up whether or not the caller ends up admitting
    /// the request, so retries during a closed window never shorten it.
    pub(super) fn record(&self, key: &str, window_ms: u64) -> RateLimitEntry {
        let now = epoch_ms();
        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| RateLimitEntry {
                count: 0,
                window_reset_at: now + window_ms,
            });

        if entry.window_reset_at <= now {
            entry.count = 0;
            entry.window_reset_at = now + window_ms;
        }
        entry.count = entry.count.saturating_add(1);

        *entry
    }

    /// Drop expired entries if enough time has passed since the last sweep.
    ///
    /// At most one caller wins the race to sweep; everyone else returns
    /// without touching the map.
    pub fn maybe_sweep(&self) {
        let now = epoch_ms();
        let last = self.last_sweep_ms.load(Ordering::Relaxed);
        if now.saturating_sub(last) <= self.sweep_interval_ms {
            return;
        }
        if self
            .last_sweep_ms
            .compare_exchange(last, now, Ordering::AcqRel, Ordering::Relaxed)
            .is_err()
        {
            return;
        }
        self.sweep();
    }

    /// Remove every entry whose window has already ended.
    pub fn sweep(&self) {
        let now = epoch_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.window_reset_at > now);

        let removed = before.saturating_sub(self.entries.len());
        if removed > 0 {
            debug!("Rate limit sweep removed {} expired entries", removed);
        }
    }

    /// Number of tracked keys, including any that expired since the last sweep.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the counter for `key`, if one exists.
    pub fn get(&self, key: &str) -> Option<RateLimitEntry> {
        self.entries.get(key).map(|entry| *entry)
    }
}
