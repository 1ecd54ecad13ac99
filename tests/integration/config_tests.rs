//! Configuration loading integration tests
//!
//! Tests configuration loading from files and the environment, default
//! fallbacks, merging, and rejection of invalid values at load time.

#[cfg(test)]
mod tests {
    use crate::common::fixtures;
    use crate::{assert_err, assert_ok};
    use promo_gateway::utils::error::GatewayError;
    use promo_gateway::Config;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    // ==================== Defaults ====================

    /// Test the default configuration is complete and valid
    #[test]
    fn test_default_config_is_valid() {
        let config = fixtures::ConfigFactory::create();
        assert_ok!(config.validate());

        assert_eq!(config.server().port, 8080);
        assert_eq!(config.rate_limit().default_limit, 5);
        assert_eq!(config.rate_limit().default_window_ms, 60_000);
        assert!(config.rate_limit().enabled);
    }

    /// Test an empty rules list falls back to a single catch-all rule
    #[test]
    fn test_default_effective_rules_catch_all() {
        let config = fixtures::ConfigFactory::create();
        let rules = config.rate_limit().effective_rules();

        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].scope, "default");
        assert_eq!(rules[0].prefix, "/");
    }

    // ==================== File Loading ====================

    /// Test a minimal file overrides only what it names
    #[tokio::test]
    async fn test_load_minimal_file() {
        let file = temp_config(fixtures::minimal_yaml());
        let config = assert_ok!(Config::from_file(file.path()).await);

        assert_eq!(config.server().host, "127.0.0.1");
        assert_eq!(config.server().port, 8099);
        // Everything else keeps its default
        assert_eq!(config.upstream().base_url, "http://127.0.0.1:3000");
        assert_eq!(config.rate_limit().default_limit, 5);
    }

    /// Test a full file populates every section
    #[tokio::test]
    async fn test_load_full_file() {
        let file = temp_config(fixtures::full_yaml());
        let config = assert_ok!(Config::from_file(file.path()).await);

        assert_eq!(config.server().timeout, 15);
        assert_eq!(config.server().max_body_size, 1_048_576);
        assert!(config.server().cors.enabled);
        assert_eq!(
            config.server().cors.allowed_origins,
            vec!["https://app.example.com".to_string()]
        );

        assert_eq!(config.upstream().base_url, "http://127.0.0.1:3900");
        assert_eq!(config.upstream().timeout_secs, 20);
        assert_eq!(config.upstream().connect_timeout_secs, 5);

        let rate_limit = config.rate_limit();
        assert_eq!(rate_limit.default_limit, 10);
        assert_eq!(rate_limit.default_window_ms, 30_000);
        assert_eq!(rate_limit.rules.len(), 2);
        assert_eq!(rate_limit.rules[0].scope, "auth");
        assert_eq!(rate_limit.rules[0].limit, Some(5));
        // The api rule has no limit of its own and inherits the default
        assert_eq!(
            rate_limit.rules[1].effective_limit(rate_limit.default_limit),
            10
        );
    }

    /// Test loading a missing file fails with a config error
    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let error = assert_err!(Config::from_file("/nonexistent/promo-gateway.yaml").await);
        assert!(matches!(error, GatewayError::Config(_)));
    }

    /// Test malformed YAML is rejected
    #[tokio::test]
    async fn test_load_invalid_yaml_fails() {
        let file = temp_config("server: [not, a, map");
        let error = assert_err!(Config::from_file(file.path()).await);
        assert!(matches!(error, GatewayError::Config(_)));
    }

    /// Test invalid values are rejected at load time, not at first use
    #[tokio::test]
    async fn test_load_rejects_invalid_values() {
        let file = temp_config("rate_limit:\n  default_limit: 0\n");
        let error = assert_err!(Config::from_file(file.path()).await);
        assert!(error.to_string().contains("limit"));
    }

    // ==================== Environment Overrides ====================

    /// Test environment variables override the defaults
    #[test]
    fn test_config_from_env() {
        unsafe {
            std::env::set_var("GATEWAY_HOST", "127.0.0.1");
            std::env::set_var("GATEWAY_PORT", "not-a-port");
        }
        let error = assert_err!(Config::from_env());
        assert!(error.to_string().contains("GATEWAY_PORT"));

        unsafe {
            std::env::set_var("GATEWAY_PORT", "9191");
            std::env::set_var("GATEWAY_UPSTREAM_URL", "http://127.0.0.1:3900");
        }
        let config = assert_ok!(Config::from_env());
        assert_eq!(config.server().host, "127.0.0.1");
        assert_eq!(config.server().port, 9191);
        assert_eq!(config.upstream().base_url, "http://127.0.0.1:3900");

        unsafe {
            std::env::remove_var("GATEWAY_HOST");
            std::env::remove_var("GATEWAY_PORT");
            std::env::remove_var("GATEWAY_UPSTREAM_URL");
        }
    }

    // ==================== Merging ====================

    /// Test merged values take precedence over the base configuration
    #[test]
    fn test_merge_overrides_base() {
        let base = fixtures::ConfigFactory::create();
        let mut other =
            fixtures::ConfigFactory::with_rules(vec![fixtures::auth_rule(), fixtures::api_rule()]);
        other.gateway.server.port = 9090;

        let merged = base.merge(other);
        assert_eq!(merged.server().port, 9090);
        assert_eq!(merged.rate_limit().rules.len(), 2);
        assert_eq!(merged.rate_limit().rules[0].scope, "auth");
        assert_eq!(merged.rate_limit().rules[1].scope, "api");
    }

    // ==================== Serialization ====================

    /// Test the configuration renders to both JSON and YAML
    #[test]
    fn test_serializes_to_json_and_yaml() {
        let config = fixtures::ConfigFactory::with_rules(vec![fixtures::auth_rule()]);

        let json = assert_ok!(config.to_json());
        assert!(json.contains("\"rate_limit\""));

        let yaml = assert_ok!(config.to_yaml());
        assert!(yaml.contains("rate_limit:"));
    }
}
