//! Error types for the dashboard

use thiserror::Error;

/// Result type alias for the dashboard
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Main error type for the dashboard
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Configuration document that does not parse or does not fit the schema
    #[error("Invalid configuration YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The student table could not be read
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unknown or unmounted view
    #[error("View not found: {0}")]
    ViewNotFound(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Service unavailable errors
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
