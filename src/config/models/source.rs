//! Student table source configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Where the student records are read from
#[derive(Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Project URL of the hosted backend, e.g. `https://xyz.supabase.co`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Anon or service key sent as `apikey` and bearer token
    #[serde(default)]
    pub api_key: String,
    /// Table holding the student rows
    #[serde(default = "default_table")]
    pub table: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            table: default_table(),
            timeout: default_timeout(),
        }
    }
}

// The key must never reach the logs.
impl fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_empty() { "<unset>" } else { "[REDACTED]" },
            )
            .field("table", &self.table)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SourceConfig {
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
