//! Configuration data models
//!
//! This module defines all configuration structures used by the dashboard.

pub mod dashboard;
pub mod logging;
pub mod server;
pub mod source;
pub mod views;

pub use dashboard::*;
pub use logging::*;
pub use server::*;
pub use source::*;
pub use views::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default backend request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Local Supabase stack REST gateway
pub fn default_base_url() -> String {
    "http://localhost:54321".to_string()
}

pub fn default_table() -> String {
    "restricted_udl_students".to_string()
}

pub fn default_max_views() -> usize {
    1000
}

/// Views unread for 15 minutes are dropped
pub fn default_idle_ttl() -> u64 {
    900
}

pub fn default_notification_history() -> usize {
    100
}

pub fn default_log_level() -> String {
    "info".to_string()
}
