//! Utility modules for the dashboard
//!
//! - **error**: error type, `Result` alias and HTTP error bodies
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{DashboardError, Result};
pub use logging::init_tracing;
