//! Rate limiting configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Default requests allowed per window
    #[serde(default = "default_limit")]
    pub default_limit: u32,
    /// Default window duration in milliseconds
    #[serde(default = "default_window_ms")]
    pub default_window_ms: u64,
    /// Minimum interval between expired-entry sweeps in milliseconds
    #[serde(default = "default_sweep_interval_ms")]
    pub sweep_interval_ms: u64,
    /// Per-route-group rules; empty means one catch-all rule
    #[serde(default)]
    pub rules: Vec<RouteRuleConfig>,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            default_limit: default_limit(),
            default_window_ms: default_window_ms(),
            sweep_interval_ms: default_sweep_interval_ms(),
            rules: vec![],
        }
    }
}

impl RateLimitConfig {
    /// Merge rate limit configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.default_limit != default_limit() {
            self.default_limit = other.default_limit;
        }
        if other.default_window_ms != default_window_ms() {
            self.default_window_ms = other.default_window_ms;
        }
        if other.sweep_interval_ms != default_sweep_interval_ms() {
            self.sweep_interval_ms = other.sweep_interval_ms;
        }
        if !other.rules.is_empty() {
            self.rules = other.rules;
        }
        self
    }

    /// Rules to install, falling back to a single catch-all rule
    ///
    /// An empty `rules` list protects everything under `/` with the
    /// configured defaults so the gateway is never accidentally open.
    pub fn effective_rules(&self) -> Vec<RouteRuleConfig> {
        if self.rules.is_empty() {
            vec![RouteRuleConfig {
                scope: "default".to_string(),
                prefix: "/".to_string(),
                limit: None,
                window_ms: None,
            }]
        } else {
            self.rules.clone()
        }
    }

    /// Validate rate limit configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.default_limit == 0 {
            return Err("Default limit cannot be 0".to_string());
        }

        if self.default_window_ms == 0 {
            return Err("Default window cannot be 0".to_string());
        }

        if self.sweep_interval_ms == 0 {
            return Err("Sweep interval cannot be 0".to_string());
        }

        let mut scopes = HashSet::new();
        for rule in &self.rules {
            rule.validate()?;
            if !scopes.insert(&rule.scope) {
                return Err(format!("Duplicate rule scope: {}", rule.scope));
            }
        }

        Ok(())
    }
}

/// A single route-group rate limit rule
///
/// The `scope` names the route group and is folded into every store key this
/// rule produces. Two rules guarding the same prefix therefore keep
/// independent counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteRuleConfig {
    /// Route group name, unique across rules
    pub scope: String,
    /// Path prefix the rule guards
    pub prefix: String,
    /// Requests allowed per window (default applies when absent)
    pub limit: Option<u32>,
    /// Window duration in milliseconds (default applies when absent)
    pub window_ms: Option<u64>,
}

impl RouteRuleConfig {
    /// Limit for this rule, falling back to the given default
    pub fn effective_limit(&self, default: u32) -> u32 {
        self.limit.unwrap_or(default)
    }

    /// Window for this rule, falling back to the given default
    pub fn effective_window_ms(&self, default: u64) -> u64 {
        self.window_ms.unwrap_or(default)
    }

    /// Validate a single rule
    pub fn validate(&self) -> Result<(), String> {
        if self.scope.is_empty() {
            return Err("Rule scope cannot be empty".to_string());
        }

        if self.prefix.is_empty() {
            return Err(format!("Rule '{}' prefix cannot be empty", self.scope));
        }

        if !self.prefix.starts_with('/') {
            return Err(format!(
                "Rule '{}' prefix must start with '/', got: {}",
                self.scope, self.prefix
            ));
        }

        if self.limit == Some(0) {
            return Err(format!("Rule '{}' limit cannot be 0", self.scope));
        }

        if self.window_ms == Some(0) {
            return Err(format!("Rule '{}' window cannot be 0", self.scope));
        }

        Ok(())
    }
}

fn default_enabled() -> bool {
    true
}
