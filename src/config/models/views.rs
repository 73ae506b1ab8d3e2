//! View session configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Limits for mounted views and the notification channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewsConfig {
    /// Maximum number of concurrently mounted views
    #[serde(default = "default_max_views")]
    pub max_views: usize,
    /// Notifications kept for `GET /api/v1/notifications`
    #[serde(default = "default_notification_history")]
    pub notification_history: usize,
    /// How long one-shot endpoints wait for the fetch to settle, in seconds
    #[serde(default = "default_timeout")]
    pub load_timeout: u64,
    /// Seconds a view may go unread before it is dropped
    #[serde(default = "default_idle_ttl")]
    pub idle_ttl: u64,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            max_views: default_max_views(),
            notification_history: default_notification_history(),
            load_timeout: default_timeout(),
            idle_ttl: default_idle_ttl(),
        }
    }
}

impl ViewsConfig {
    pub fn load_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.load_timeout)
    }

    pub fn idle_ttl_duration(&self) -> Duration {
        Duration::from_secs(self.idle_ttl)
    }
}
