//! # Promo Gateway
//!
//! A reverse proxy that sits in front of a promotional API and enforces
//! per-client rate limits before requests ever reach the upstream.
//!
//! ## Features
//!
//! - **Fixed-Window Rate Limiting**: Per-client, per-route counters with lazy expiry
//! - **Prefix Rules**: Independent limits per route prefix, driven by YAML config
//! - **Standard Headers**: `X-RateLimit-*` on every limited route's responses, `Retry-After` on 429
//! - **Transparent Proxying**: Method, path, query, headers, and body relayed upstream
//! - **No Background Work**: Counter cleanup piggybacks on request handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use promo_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     let gateway = Gateway::new(config)?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use crate::config::Config;
pub use crate::core::rate_limiter::{RateLimitDecision, RateLimitStore, RateLimiter};
pub use crate::server::{AppState, HttpServer};
pub use crate::utils::error::{GatewayError, Result};

use tracing::info;

/// A minimal gateway wrapper that ties configuration to a running server
pub struct Gateway {
    config: Config,
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::HttpServer::new(&config)?;

        Ok(Self { config, server })
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        info!("Starting Promo Gateway");
        info!("Configuration: {:#?}", self.config);

        self.server.start().await?;

        Ok(())
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build information for the current binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
