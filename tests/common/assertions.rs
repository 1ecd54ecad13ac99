//! Custom test assertions
//!
//! Provides domain-specific assertions for testing gateway responses.

use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderMap;
use promo_gateway::server::middleware::{
    HEADER_LIMIT, HEADER_REMAINING, HEADER_RESET, HEADER_RETRY_AFTER,
};

/// Assertions for rate limited responses
pub trait RateLimitAssertions {
    /// Assert the standard rate limit headers carry the expected values
    fn assert_rate_limit_headers(&self, limit: u32, remaining: u32);

    /// Assert the `Retry-After` hint is positive and fits inside the window
    fn assert_retry_after_within(&self, window_ms: u64);

    /// Assert no rate limit headers were attached at all
    fn assert_no_rate_limit_headers(&self);
}

impl<B> RateLimitAssertions for ServiceResponse<B> {
    fn assert_rate_limit_headers(&self, limit: u32, remaining: u32) {
        let headers = self.headers();
        assert_eq!(
            header_u64(headers, HEADER_LIMIT),
            u64::from(limit),
            "Unexpected {} header",
            HEADER_LIMIT
        );
        assert_eq!(
            header_u64(headers, HEADER_REMAINING),
            u64::from(remaining),
            "Unexpected {} header",
            HEADER_REMAINING
        );
        assert!(
            header_u64(headers, HEADER_RESET) > 0,
            "Expected {} header to carry an epoch timestamp",
            HEADER_RESET
        );
    }

    fn assert_retry_after_within(&self, window_ms: u64) {
        let retry_after = header_u64(self.headers(), HEADER_RETRY_AFTER);
        assert!(retry_after >= 1, "Retry-After must be at least one second");
        assert!(
            retry_after <= window_ms.div_ceil(1000),
            "Retry-After {}s exceeds the {}ms window",
            retry_after,
            window_ms
        );
    }

    fn assert_no_rate_limit_headers(&self) {
        let headers = self.headers();
        for name in [HEADER_LIMIT, HEADER_REMAINING, HEADER_RESET, HEADER_RETRY_AFTER] {
            assert!(
                headers.get(name).is_none(),
                "Expected {} header to be absent",
                name
            );
        }
    }
}

/// Read a header as a number, panicking with context when absent or malformed
pub fn header_u64(headers: &HeaderMap, name: &str) -> u64 {
    let value = headers
        .get(name)
        .unwrap_or_else(|| panic!("Expected {} header to be present", name));
    value
        .to_str()
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| panic!("Expected {} header to be numeric, got {:?}", name, value))
}
