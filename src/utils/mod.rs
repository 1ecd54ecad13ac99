//! Utility modules for the Promo Gateway
//!
//! The utilities are organized by functionality to provide better separation
//! of concerns and easier maintenance.

pub mod error;

// Re-export commonly used types for convenience
pub use error::{ErrorDetail, ErrorResponse, GatewayError, Result};
