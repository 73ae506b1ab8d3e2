//! Main dashboard configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Student table source
    #[serde(default)]
    pub source: SourceConfig,
    /// View session limits
    #[serde(default)]
    pub views: ViewsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
