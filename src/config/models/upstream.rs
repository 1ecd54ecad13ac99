//! Upstream backend configuration

use super::*;
use serde::{Deserialize, Serialize};
use url::Url;

/// Upstream backend configuration
///
/// The gateway forwards admitted requests to this backend, which owns all
/// business logic (promotions, budgets, customers). The gateway itself never
/// interprets backend payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the backend
    #[serde(default = "default_upstream_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_url(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl UpstreamConfig {
    /// Merge upstream configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.base_url != default_upstream_url() {
            self.base_url = other.base_url;
        }
        if other.timeout_secs != default_timeout() {
            self.timeout_secs = other.timeout_secs;
        }
        if other.connect_timeout_secs != default_connect_timeout() {
            self.connect_timeout_secs = other.connect_timeout_secs;
        }
        self
    }

    /// Base URL with any trailing slash removed, ready for path concatenation
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validate upstream configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Upstream base URL is required".to_string());
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("Upstream base URL is invalid: {}", e))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(format!(
                    "Upstream base URL must use http:// or https://, got: {}",
                    scheme
                ));
            }
        }

        if url.host_str().is_none() {
            return Err("Upstream base URL must have a host".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("Upstream timeout cannot be 0".to_string());
        }

        Ok(())
    }
}
