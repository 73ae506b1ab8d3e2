//! Environment overrides
//!
//! `.env` files are loaded by the binary through `dotenvy` before this runs.

use super::models::*;
use crate::utils::error::{DashboardError, Result};
use std::env;
use tracing::debug;

impl DashboardConfig {
    /// Overlay values from the process environment
    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_from(|key| env::var(key).ok())
    }

    /// Overlay values from an arbitrary variable lookup
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("DASHBOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("DASHBOARD_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| DashboardError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Some(workers) = lookup("DASHBOARD_WORKERS") {
            self.server.workers = Some(
                workers
                    .parse()
                    .map_err(|e| DashboardError::Config(format!("Invalid workers count: {}", e)))?,
            );
        }

        if let Some(url) = lookup("SUPABASE_URL") {
            self.source.base_url = url;
        }
        if let Some(key) = lookup("SUPABASE_KEY") {
            self.source.api_key = key;
        }
        if let Some(table) = lookup("STUDENTS_TABLE") {
            self.source.table = table;
        }
        if let Some(timeout) = lookup("SOURCE_TIMEOUT") {
            self.source.timeout = timeout
                .parse()
                .map_err(|e| DashboardError::Config(format!("Invalid source timeout: {}", e)))?;
        }

        if let Some(level) = lookup("DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = lookup("DASHBOARD_LOG_JSON") {
            self.logging.json = json
                .parse()
                .map_err(|e| DashboardError::Config(format!("Invalid log json flag: {}", e)))?;
        }

        debug!("Configuration overlaid with environment variables");
        Ok(self)
    }
}
