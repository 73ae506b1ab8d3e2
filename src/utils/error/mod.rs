//! Error handling for the dashboard
//!
//! This module defines the error type shared by the loader, the HTTP layer and
//! configuration loading, together with its HTTP response mapping.

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{DashboardError, Result};
