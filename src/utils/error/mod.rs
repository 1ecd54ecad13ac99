//! Error handling for the Gateway
//!
//! This module defines all error types used throughout the gateway.

mod helpers;
mod response;
mod types;

// Re-export all public types
pub use response::{ErrorDetail, ErrorResponse};
pub use types::{GatewayError, Result};
