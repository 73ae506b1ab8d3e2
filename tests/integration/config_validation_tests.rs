//! Configuration validation integration tests
//!
//! Tests for configuration loading and validation across all config
//! components.

#[cfg(test)]
mod tests {
    use cohort_dashboard::config::models::{
        CorsConfig, DashboardConfig, LoggingConfig, ServerConfig, SourceConfig, ViewsConfig,
    };
    use cohort_dashboard::config::{Config, Validate};
    use cohort_dashboard::utils::error::DashboardError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_valid_config() -> DashboardConfig {
        DashboardConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
                workers: Some(2),
                cors: CorsConfig::default(),
            },
            source: SourceConfig {
                base_url: "https://abc.supabase.co".to_string(),
                api_key: "anon".to_string(),
                table: "restricted_udl_students".to_string(),
                timeout: 30,
            },
            views: ViewsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    // ==================== DashboardConfig Validation ====================

    /// Test that a valid config passes validation
    #[test]
    fn test_valid_config() {
        assert!(create_valid_config().validate().is_ok());
    }

    /// Test that the defaults are valid on their own
    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server().host, "0.0.0.0");
        assert_eq!(config.server().port, 8000);
        assert_eq!(config.source().table, "restricted_udl_students");
        assert_eq!(config.source().timeout, 30);
        assert_eq!(config.views().max_views, 1000);
        assert_eq!(config.views().notification_history, 100);
        assert_eq!(config.views().idle_ttl, 900);
    }

    /// Test that server port 0 fails validation
    #[test]
    fn test_port_zero() {
        let mut config = create_valid_config();
        config.server.port = 0;

        let result = config.validate();
        assert!(result.unwrap_err().contains("port"));
    }

    /// Test that zero workers fail validation
    #[test]
    fn test_zero_workers() {
        let mut config = create_valid_config();
        config.server.workers = Some(0);
        assert!(config.validate().unwrap_err().contains("Worker"));
    }

    // ==================== SourceConfig Validation ====================

    /// Test that non-http schemes are rejected
    #[test]
    fn test_source_scheme() {
        let mut config = create_valid_config();
        config.source.base_url = "ftp://abc.supabase.co".to_string();
        assert!(config.validate().unwrap_err().contains("scheme"));
    }

    /// Test that an unparseable base URL is rejected
    #[test]
    fn test_source_invalid_url() {
        let mut config = create_valid_config();
        config.source.base_url = "not a url".to_string();
        assert!(config.validate().unwrap_err().contains("invalid URL"));
    }

    /// Test that the table name cannot escape the request path
    #[test]
    fn test_source_table_name() {
        let mut config = create_valid_config();

        config.source.table = String::new();
        assert!(config.validate().is_err());

        config.source.table = "../auth/users".to_string();
        assert!(config.validate().unwrap_err().contains("letters, digits"));

        config.source.table = "students_2024".to_string();
        assert!(config.validate().is_ok());
    }

    /// Test the timeout bounds
    #[test]
    fn test_source_timeout_bounds() {
        let mut config = create_valid_config();

        config.source.timeout = 0;
        assert!(config.validate().is_err());

        config.source.timeout = 301;
        assert!(config.validate().is_err());

        config.source.timeout = 300;
        assert!(config.validate().is_ok());
    }

    /// Test that a missing key is allowed
    #[test]
    fn test_source_without_key() {
        let mut config = create_valid_config();
        config.source.api_key = String::new();
        assert!(config.validate().is_ok());
    }

    // ==================== Views and Logging ====================

    #[test]
    fn test_views_limits() {
        let mut config = create_valid_config();
        config.views.max_views = 0;
        assert!(config.validate().unwrap_err().contains("max_views"));

        let mut config = create_valid_config();
        config.views.notification_history = 0;
        assert!(config.validate().is_err());

        let mut config = create_valid_config();
        config.views.idle_ttl = 10;
        assert!(config.validate().unwrap_err().contains("idle_ttl"));

        config.views.idle_ttl = config.views.load_timeout;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level() {
        let mut config = create_valid_config();
        config.logging.level = "WARN".to_string();
        assert!(config.validate().is_ok());

        config.logging.level = "verbose".to_string();
        assert!(config.validate().unwrap_err().contains("log level"));
    }

    /// Test that credentials with a wildcard origin are rejected
    #[test]
    fn test_cors_credentials_with_wildcard() {
        let mut config = create_valid_config();
        config.server.cors.allow_credentials = true;
        assert!(config.validate().is_err());

        config.server.cors.allowed_origins = vec!["https://admin.example.com".to_string()];
        assert!(config.validate().is_ok());
    }

    // ==================== Loading ====================

    /// Test loading a YAML file with partial sections
    #[tokio::test]
    async fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "source:\n  base_url: \"https://abc.supabase.co\"\n  table: \"students\"\nlogging:\n  json: true"
        )
        .unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.source().table, "students");
        assert_eq!(config.source().timeout, 30);
        assert!(config.logging().json);
        assert_eq!(config.server().port, 8000);
    }

    /// Test that invalid YAML values are reported as configuration errors
    #[tokio::test]
    async fn test_load_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "source:\n  timeout: 0").unwrap();

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
        assert!(err.to_string().contains("Source config error"));
    }

    /// Test that an explicit path that does not exist is an error
    #[tokio::test]
    async fn test_load_missing_explicit_path() {
        let result = Config::load(Some(std::path::Path::new("/no/such/dashboard.yaml"))).await;
        assert!(matches!(result, Err(DashboardError::Config(_))));
    }

    /// Test that the YAML rendering reloads to the same values
    #[test]
    fn test_yaml_round_trip() {
        let config = Config {
            dashboard: create_valid_config(),
        };
        let yaml = config.to_yaml().unwrap();
        let reloaded = Config::from_yaml(&yaml).unwrap();

        assert_eq!(reloaded.source().base_url, "https://abc.supabase.co");
        assert_eq!(reloaded.server().workers, Some(2));
    }

    /// Test that Debug output hides the key
    #[test]
    fn test_debug_redacts_key() {
        let mut config = create_valid_config();
        config.source.api_key = "super-secret-service-key".to_string();

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret-service-key"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
