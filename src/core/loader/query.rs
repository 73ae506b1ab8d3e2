//! Scoped request object for one view

use super::source::StudentSource;
use crate::core::models::StudentRecord;
use crate::core::notifications::Notifier;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

/// Toast shown when the table cannot be read
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch students";

/// Observable state of a view's fetch
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState {
    /// Request in flight; consumers render a loading placeholder
    Pending,
    /// Rows as returned by the backend
    Loaded(Arc<Vec<StudentRecord>>),
    /// The fetch failed; the view shows an empty list
    Failed { message: String },
}

impl QueryState {
    pub fn is_pending(&self) -> bool {
        matches!(self, QueryState::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, QueryState::Failed { .. })
    }

    /// Rows to render; empty unless loaded
    pub fn records(&self) -> &[StudentRecord] {
        match self {
            QueryState::Loaded(records) => records.as_slice(),
            QueryState::Pending | QueryState::Failed { .. } => &[],
        }
    }
}

/// One read-all request and its settled result
#[derive(Debug, Clone)]
pub struct StudentQuery {
    state: watch::Receiver<QueryState>,
}

impl StudentQuery {
    /// Start the fetch in the background. Must be called inside a Tokio runtime.
    pub fn start(source: Arc<dyn StudentSource>, notifier: Notifier) -> Self {
        let (sender, state) = watch::channel(QueryState::Pending);

        // Detached: dropping the query does not cancel an in-flight fetch
        tokio::spawn(async move {
            let settled = run_fetch(source.as_ref(), &notifier).await;
            let _ = sender.send(settled);
        });

        Self { state }
    }

    /// Current state without waiting
    pub fn state(&self) -> QueryState {
        self.state.borrow().clone()
    }

    /// Wait until the fetch has settled
    pub async fn settled(&self) -> QueryState {
        let mut state = self.state.clone();
        match state.wait_for(|s| !s.is_pending()).await {
            Ok(settled) => settled.clone(),
            // The task only drops its sender after sending, or on panic
            Err(_) => QueryState::Failed {
                message: "loader task ended before settling".to_string(),
            },
        }
    }
}

/// Perform the single fetch and turn its outcome into a settled state
pub(crate) async fn run_fetch(source: &dyn StudentSource, notifier: &Notifier) -> QueryState {
    match source.fetch_all().await {
        Ok(rows) => {
            let records = rows.unwrap_or_default();
            info!(
                source = %source.describe(),
                records = records.len(),
                "Student records loaded"
            );
            QueryState::Loaded(Arc::new(records))
        }
        Err(e) => {
            warn!(source = %source.describe(), error = %e, "Failed to fetch students");
            notifier.error(FETCH_FAILED_MESSAGE);
            QueryState::Failed {
                message: e.to_string(),
            }
        }
    }
}
