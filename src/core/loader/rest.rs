//! PostgREST-style table client (Supabase `rest/v1`)

use super::source::StudentSource;
use crate::config::SourceConfig;
use crate::core::models::StudentRecord;
use crate::utils::error::{DashboardError, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Longest upstream error body echoed into a fetch failure
const MAX_ERROR_BODY: usize = 200;

/// Reads `GET {base_url}/rest/v1/{table}?select=*`
#[derive(Clone)]
pub struct RestStudentSource {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
    table: String,
    timeout: Duration,
}

impl RestStudentSource {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Self::with_client(config, client)
    }

    /// Build on top of an existing client
    pub fn with_client(config: &SourceConfig, client: reqwest::Client) -> Result<Self> {
        let endpoint = Self::endpoint_for(&config.base_url, &config.table)?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
            table: config.table.clone(),
            timeout: config.timeout_duration(),
        })
    }

    fn endpoint_for(base_url: &str, table: &str) -> Result<Url> {
        let mut base = Url::parse(base_url)
            .map_err(|e| DashboardError::Config(format!("Invalid source base_url: {}", e)))?;

        // Keep any path prefix the base URL already has
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut endpoint = base
            .join("rest/v1/")
            .and_then(|rest| rest.join(table))
            .map_err(|e| DashboardError::Config(format!("Invalid student table path: {}", e)))?;
        endpoint.query_pairs_mut().append_pair("select", "*");
        Ok(endpoint)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl StudentSource for RestStudentSource {
    async fn fetch_all(&self) -> Result<Option<Vec<StudentRecord>>> {
        debug!(table = %self.table, "Fetching student rows");

        let mut request = self
            .client
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .timeout(self.timeout);

        if !self.api_key.is_empty() {
            request = request
                .header("apikey", &self.api_key)
                .bearer_auth(&self.api_key);
        }

        let response = request.send().await.map_err(|e| {
            DashboardError::fetch(format!("Request for table {} failed: {}", self.table, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(MAX_ERROR_BODY).collect();
            return Err(DashboardError::fetch(format!(
                "HTTP {} from table {}: {}",
                status, self.table, body
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| DashboardError::fetch(format!("Failed to read response: {}", e)))?;

        let rows: Option<Vec<StudentRecord>> = serde_json::from_str(&text)
            .map_err(|e| DashboardError::fetch(format!("Failed to decode student rows: {}", e)))?;

        debug!(
            table = %self.table,
            rows = rows.as_ref().map_or(0, Vec::len),
            "Fetched student rows"
        );
        Ok(rows)
    }

    fn describe(&self) -> String {
        format!("table {} at {}", self.table, self.endpoint.origin().ascii_serialization())
    }
}
