//! Source seam for student rows

use crate::core::models::StudentRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Something that can return the full student table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentSource: Send + Sync {
    /// Read every row. `Ok(None)` means the backend answered `null`.
    async fn fetch_all(&self) -> Result<Option<Vec<StudentRecord>>>;

    /// Short description for logs
    fn describe(&self) -> String;
}
