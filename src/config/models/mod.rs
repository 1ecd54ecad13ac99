//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

pub mod gateway;
pub mod rate_limit;
pub mod server;
pub mod upstream;

// Re-export all configuration types
pub use gateway::*;
pub use rate_limit::*;
pub use server::*;
pub use upstream::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    10 * 1024 * 1024 // 10MB
}

/// Default upstream base URL (the promo API backend)
pub fn default_upstream_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

/// Default upstream connect timeout in seconds
pub fn default_connect_timeout() -> u64 {
    10
}

/// Default requests allowed per window
pub fn default_limit() -> u32 {
    5
}

/// Default window duration in milliseconds
pub fn default_window_ms() -> u64 {
    60_000
}

/// Default interval between expired-entry sweeps in milliseconds
pub fn default_sweep_interval_ms() -> u64 {
    60_000
}
