//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::loader::StudentSource;
use crate::core::notifications::Notifier;
use crate::server::views::ViewRegistry;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Cloned into every actix worker; all fields are cheap handles onto the
/// same underlying resources.
#[derive(Clone)]
pub struct AppState {
    /// Dashboard configuration (shared read-only)
    pub config: Arc<Config>,
    /// Where view fetches read student rows from
    pub source: Arc<dyn StudentSource>,
    /// Toast channel shared by every view
    pub notifier: Notifier,
    /// Mounted view sessions
    pub views: Arc<ViewRegistry>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, source: Arc<dyn StudentSource>) -> Self {
        let notifier = Notifier::new(config.views().notification_history);
        let views = ViewRegistry::new(config.views().max_views, config.views().idle_ttl_duration());

        Self {
            config: Arc::new(config),
            source,
            notifier,
            views: Arc::new(views),
        }
    }

    /// Get dashboard configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
