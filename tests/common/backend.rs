//! Stand-ins for the student table backend
//!
//! [`MockBackend`] is a wiremock server speaking the `rest/v1` wire contract;
//! [`StaticSource`] and [`PendingSource`] skip HTTP entirely.

use async_trait::async_trait;
use cohort_dashboard::config::SourceConfig;
use cohort_dashboard::core::loader::StudentSource;
use cohort_dashboard::core::models::StudentRecord;
use cohort_dashboard::utils::error::{DashboardError, Result};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TABLE: &str = "restricted_udl_students";
pub const TEST_KEY: &str = "test-anon-key";

/// Mock REST backend
pub struct MockBackend {
    pub server: MockServer,
}

impl MockBackend {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Source configuration pointing at this server
    pub fn source_config(&self) -> SourceConfig {
        SourceConfig {
            base_url: self.server.uri(),
            api_key: TEST_KEY.to_string(),
            table: TEST_TABLE.to_string(),
            timeout: 5,
        }
    }

    fn table_path() -> String {
        format!("/rest/v1/{}", TEST_TABLE)
    }

    /// Answer the read-all query with these records
    pub async fn serve_rows(&self, rows: &[StudentRecord]) {
        let body = serde_json::to_value(rows).expect("rows serialize");
        self.serve_json(body).await;
    }

    /// Answer the read-all query with a raw JSON body
    pub async fn serve_json(&self, body: Value) {
        Mock::given(method("GET"))
            .and(path(Self::table_path()))
            .and(query_param("select", "*"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer with an error status
    pub async fn serve_status(&self, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(Self::table_path()))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Answer with a body that is not JSON
    pub async fn serve_garbage(&self) {
        Mock::given(method("GET"))
            .and(path(Self::table_path()))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the backend has seen
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

/// In-process source returning a fixed snapshot, or failing
pub struct StaticSource {
    rows: Option<Vec<StudentRecord>>,
    fail: bool,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn new(rows: Vec<StudentRecord>) -> Self {
        Self {
            rows: Some(rows),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// A backend that answers `null`
    pub fn null_body() -> Self {
        Self {
            rows: None,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            rows: None,
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StudentSource for StaticSource {
    async fn fetch_all(&self) -> Result<Option<Vec<StudentRecord>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DashboardError::fetch("backend unavailable"));
        }
        Ok(self.rows.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// A source whose fetch never settles
pub struct PendingSource;

#[async_trait]
impl StudentSource for PendingSource {
    async fn fetch_all(&self) -> Result<Option<Vec<StudentRecord>>> {
        std::future::pending().await
    }

    fn describe(&self) -> String {
        "pending".to_string()
    }
}
