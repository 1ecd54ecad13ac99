//! Rate limiting types and data structures

/// A single counter window for one rate limit key.
///
/// `window_reset_at` is a Unix timestamp in milliseconds. An entry whose
/// reset time has passed is stale; the next request for the same key reuses
/// it in place, and the periodic sweep removes it otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitEntry {
    /// Requests observed in the current window, admitted or not
    pub count: u32,
    /// When the current window ends (epoch milliseconds)
    pub window_reset_at: u64,
}

/// Outcome of a single admission check.
#[derive(Debug, Clone)]
pub struct RateLimitDecision {
    /// Whether the request may proceed to its handler
    pub allowed: bool,
    /// Requests counted against the window so far, including this one
    pub current_count: u32,
    /// Maximum requests admitted per window
    pub limit: u32,
    /// Requests left in the window, never negative
    pub remaining: u32,
    /// When the window ends (epoch seconds)
    pub reset_at_secs: u64,
    /// Seconds to wait before retrying, set only on rejection
    pub retry_after_secs: Option<u64>,
}
