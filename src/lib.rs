//! # cohort-dashboard
//!
//! Backend for an admin dashboard over a table of student records hosted on a
//! backend-as-a-service REST endpoint.
//!
//! ## Features
//!
//! - **Data loader**: one read-all request per mounted view, with an
//!   observable pending/loaded/failed lifecycle
//! - **View aggregator**: case-insensitive search, unassigned subset, KPI
//!   counts and batch distribution, all pure functions of one snapshot
//! - **Notifications**: transient toasts for fetch failures and exports
//! - **HTTP API**: actix-web service exposing the widgets as JSON
//!
//! ## Aggregating a snapshot
//!
//! ```rust
//! use cohort_dashboard::core::aggregator::ViewAggregate;
//! use cohort_dashboard::core::models::StudentRecord;
//!
//! let records = vec![
//!     StudentRecord::new("1").with_name("John Doe").with_batch("A"),
//!     StudentRecord::new("2").with_name("Jane Smith"),
//! ];
//!
//! let view = ViewAggregate::compute(&records, "jane");
//! assert_eq!(view.filtered.len(), 1);
//! assert_eq!(view.summary.rate_label(), "50.0%");
//! ```
//!
//! ## Service mode
//!
//! ```rust,no_run
//! use cohort_dashboard::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/dashboard.yaml").await?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod cli;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::aggregator::{AssignmentSummary, BatchBucket, BatchHistogram, ViewAggregate};
pub use core::loader::{QueryState, RestStudentSource, StudentQuery, StudentSource};
pub use core::models::StudentRecord;
pub use core::notifications::{Notification, Notifier, Severity};
pub use utils::error::{DashboardError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
