//! HTTP middleware implementations
//!
//! This module provides the middleware for request processing:
//! - Per-scope rate limiting
//! - Request ID tracking

mod helpers;
mod rate_limit;
mod request_id;


// Re-export all middleware
pub use helpers::{client_identifier, FALLBACK_IDENTIFIER};
pub use rate_limit::{
    RateLimitExceeded, RateLimitMiddleware, RateLimitMiddlewareService, HEADER_LIMIT,
    HEADER_REMAINING, HEADER_RESET, HEADER_RETRY_AFTER,
};
pub use request_id::{RequestIdMiddleware, RequestIdMiddlewareService, REQUEST_ID_HEADER};
