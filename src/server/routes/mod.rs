//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod notifications;
pub mod oneshot;
pub mod views;

use crate::core::presentation::Tab;
use crate::utils::error::{DashboardError, Result};
use actix_web::HttpResponse;
use actix_web::web::QueryConfig;
use serde::Deserialize;
use uuid::Uuid;

/// Standard API response structure
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Additional metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            meta: None,
        }
    }

    /// Create a successful response with metadata
    pub fn success_with_meta(data: T, meta: serde_json::Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            meta: Some(meta),
        }
    }

    /// Convert the API response to an HTTP 200 response
    pub fn to_http_response(&self) -> HttpResponse {
        HttpResponse::Ok().json(self)
    }
}

/// `?search=&tab=` parameters of the student table
#[derive(Debug, Default, Deserialize)]
pub struct TableQuery {
    #[serde(default)]
    pub search: String,
    pub tab: Option<String>,
}

impl TableQuery {
    pub fn tab(&self) -> Result<Tab> {
        match self.tab.as_deref() {
            None | Some("") => Ok(Tab::default()),
            Some(raw) => raw.parse(),
        }
    }
}

/// Query string errors use the standard error body
pub fn query_config() -> QueryConfig {
    QueryConfig::default()
        .error_handler(|err, _req| DashboardError::bad_request(err.to_string()).into())
}

/// View ids that are not UUIDs cannot name a mounted view
pub(crate) fn parse_view_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| DashboardError::view_not_found(raw))
}
