//! Configuration management for the dashboard
//!
//! This module handles loading, validation, and management of all dashboard configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{DashboardError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Configuration file picked up when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "config/dashboard.yaml";

/// Main configuration struct for the dashboard
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Dashboard configuration
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DashboardError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let dashboard: DashboardConfig = serde_yaml::from_str(content)?;

        let config = Self { dashboard };
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective configuration: file (explicit path, or
    /// `config/dashboard.yaml` when present, or defaults), then environment
    /// overrides on top.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path).await?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH).await?
            }
            None => {
                debug!("No configuration file found, using defaults");
                Self::default()
            }
        };

        let config = Self {
            dashboard: base.dashboard.apply_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.dashboard.server
    }

    /// Get source configuration
    pub fn source(&self) -> &SourceConfig {
        &self.dashboard.source
    }

    /// Get view configuration
    pub fn views(&self) -> &ViewsConfig {
        &self.dashboard.views
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.dashboard.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.dashboard
            .server
            .validate()
            .map_err(|e| DashboardError::Config(format!("Server config error: {}", e)))?;

        self.dashboard
            .server
            .cors
            .validate()
            .map_err(|e| DashboardError::Config(format!("CORS config error: {}", e)))?;

        self.dashboard
            .source
            .validate()
            .map_err(|e| DashboardError::Config(format!("Source config error: {}", e)))?;

        self.dashboard
            .views
            .validate()
            .map_err(|e| DashboardError::Config(format!("Views config error: {}", e)))?;

        self.dashboard
            .logging
            .validate()
            .map_err(|e| DashboardError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.dashboard)?)
    }
}
