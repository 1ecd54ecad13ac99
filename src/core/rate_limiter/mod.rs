//! Fixed-window rate limiting
//!
//! Requests are grouped by rule scope, client identifier, and request path.
//! Each group gets an independent counter that admits a configured number of
//! requests per window. Counters live in a process-wide [`RateLimitStore`]
//! that is injected into every [`RateLimiter`], so limits hold across all
//! server workers in the process. Cross-process coordination is out of scope.
//!
//! Expired counters are not removed on a timer. Each admission check gives
//! the store a chance to sweep, which drops every expired entry at most once
//! per sweep interval.

mod limiter;
mod store;
mod types;

pub use limiter::RateLimiter;
pub use store::RateLimitStore;
pub use types::{RateLimitDecision, RateLimitEntry};
