//! Common test utilities for Promo Gateway
//!
//! This module provides shared test infrastructure for all tests:
//! - Configuration and limiter factories
//! - Rate limit header assertions
//! - Custom assertion macros
//!
//! # Usage
//!
//! ```rust
//! use crate::common::fixtures;
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let config = fixtures::ConfigFactory::with_rules(vec![fixtures::auth_rule()]);
//!     // ...
//! }
//! ```

pub mod assertions;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::RateLimitAssertions;
pub use fixtures::ConfigFactory;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
