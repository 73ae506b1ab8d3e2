//! Configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::{debug, warn};
use url::Url;

impl Validate for DashboardConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating dashboard configuration");

        self.server.validate()?;
        self.server.cors.validate()?;
        self.source.validate()?;
        self.views.validate()?;
        self.logging.validate()?;

        debug!("Dashboard configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
            if workers > 1000 {
                return Err("Worker count seems too high (>1000)".to_string());
            }
        }

        Ok(())
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled {
            if self.allows_all_origins() && self.allow_credentials {
                return Err(
                    "CORS cannot allow all origins (*) when credentials are enabled".to_string(),
                );
            }

            if self.allows_all_origins() {
                warn!("CORS allows all origins. This may be insecure for production.");
            }
        }
        Ok(())
    }
}

impl Validate for SourceConfig {
    fn validate(&self) -> Result<(), String> {
        validate_source_url(&self.base_url)?;

        if self.table.is_empty() {
            return Err("Student table name cannot be empty".to_string());
        }

        // The table name is spliced into the request path
        if !self
            .table
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(format!(
                "Student table name '{}' may only contain letters, digits and underscores",
                self.table
            ));
        }

        if self.timeout == 0 {
            return Err("Source timeout must be greater than 0".to_string());
        }

        if self.timeout > 300 {
            return Err("Source timeout should not exceed 5 minutes".to_string());
        }

        if self.api_key.is_empty() {
            warn!("No source API key configured; requests are sent without credentials");
        }

        Ok(())
    }
}

impl Validate for ViewsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_views == 0 {
            return Err("max_views must be greater than 0".to_string());
        }

        if self.notification_history == 0 {
            return Err("notification_history must be greater than 0".to_string());
        }

        if self.load_timeout == 0 {
            return Err("load_timeout must be greater than 0".to_string());
        }

        if self.idle_ttl < self.load_timeout {
            return Err(format!(
                "idle_ttl ({}s) must be at least load_timeout ({}s)",
                self.idle_ttl, self.load_timeout
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

        if !LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log level '{}', expected one of {}",
                self.level,
                LEVELS.join(", ")
            ));
        }
        Ok(())
    }
}

/// Check that the backend URL is an absolute http(s) URL with a host
pub fn validate_source_url(url_str: &str) -> Result<(), String> {
    let url = Url::parse(url_str)
        .map_err(|e| format!("Source base_url has invalid URL format: {}", e))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(format!(
                "Source base_url must use http:// or https:// scheme, got: {}",
                scheme
            ));
        }
    }

    if url.host_str().is_none() {
        return Err("Source base_url must have a valid host".to_string());
    }

    if url.query().is_some() {
        return Err("Source base_url must not carry a query string".to_string());
    }

    Ok(())
}
