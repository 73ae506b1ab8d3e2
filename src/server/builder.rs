//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function used by the `serve` command.

use crate::config::Config;
use crate::core::loader::StudentSource;
use crate::server::server::HttpServer;
use crate::utils::error::{DashboardError, Result};
use std::sync::Arc;
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
    source: Option<Arc<dyn StudentSource>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self {
            config: None,
            source: None,
        }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the REST source built from configuration
    pub fn with_source(mut self, source: Arc<dyn StudentSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| DashboardError::Config("Configuration is required".to_string()))?;

        match self.source {
            Some(source) => Ok(HttpServer::with_source(&config, source)),
            None => HttpServer::new(&config),
        }
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with an already resolved configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting cohort dashboard {}", crate::VERSION);

    let server = ServerBuilder::new().with_config(config.clone()).build()?;

    info!(
        "Server starting at: http://{}:{}",
        config.server().host,
        config.server().port
    );
    info!("API Endpoints:");
    info!("   GET    /health - Health check");
    info!("   POST   /api/v1/views - Mount a view");
    info!("   GET    /api/v1/views/{{id}}/students - Student table");
    info!("   GET    /api/v1/views/{{id}}/dashboard - KPI cards and batch chart");
    info!("   GET    /api/v1/views/{{id}}/students/{{student_id}} - Student detail");
    info!("   POST   /api/v1/views/{{id}}/export - Export to CSV");
    info!("   DELETE /api/v1/views/{{id}} - Unmount a view");
    info!("   GET    /api/v1/students - One-shot student table");
    info!("   GET    /api/v1/dashboard - One-shot dashboard");
    info!("   GET    /api/v1/notifications - Recent notifications");

    server.start().await
}
