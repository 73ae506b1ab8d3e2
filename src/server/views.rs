//! Registry of mounted view sessions
//!
//! A view is one client-side dashboard instance. Mounting it starts its own
//! fetch; the registry only tracks which views are alive. Browsers that close
//! a tab never send the unmount, so views unread for `idle_ttl` are dropped
//! on the next mount and by [`ViewRegistry::spawn_sweeper`].

use crate::core::loader::{StudentQuery, StudentSource};
use crate::core::notifications::Notifier;
use crate::utils::error::{DashboardError, Result};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

/// A mounted view and its fetch
#[derive(Debug, Clone)]
pub struct ViewSession {
    pub id: Uuid,
    pub mounted_at: DateTime<Utc>,
    /// Last mount or read through the registry
    pub last_seen: DateTime<Utc>,
    pub query: StudentQuery,
}

impl ViewSession {
    /// Whether the view has gone unread for at least `ttl` at `now`
    pub fn is_idle(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.signed_duration_since(self.last_seen)
            .to_std()
            .is_ok_and(|idle| idle >= ttl)
    }
}

#[derive(Debug)]
pub struct ViewRegistry {
    sessions: DashMap<Uuid, ViewSession>,
    max_views: usize,
    idle_ttl: Duration,
}

impl ViewRegistry {
    pub fn new(max_views: usize, idle_ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            max_views,
            idle_ttl,
        }
    }

    /// Mount a new view, starting its fetch immediately
    pub fn mount(&self, source: Arc<dyn StudentSource>, notifier: Notifier) -> Result<ViewSession> {
        let now = Utc::now();
        if self.sessions.len() >= self.max_views {
            self.evict_idle(now);
        }
        if self.sessions.len() >= self.max_views {
            return Err(DashboardError::unavailable(format!(
                "Too many mounted views (limit {})",
                self.max_views
            )));
        }

        let session = ViewSession {
            id: Uuid::new_v4(),
            mounted_at: now,
            last_seen: now,
            query: StudentQuery::start(source, notifier),
        };
        self.sessions.insert(session.id, session.clone());

        info!(view_id = %session.id, mounted = self.sessions.len(), "View mounted");
        Ok(session)
    }

    /// Look up a view and mark it as seen
    pub fn get(&self, id: &Uuid) -> Result<ViewSession> {
        let mut entry = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| DashboardError::view_not_found(id.to_string()))?;

        entry.last_seen = Utc::now();
        Ok(entry.value().clone())
    }

    /// Drop a view; its in-flight fetch, if any, still runs to completion
    pub fn unmount(&self, id: &Uuid) -> Result<ViewSession> {
        let (_, session) = self
            .sessions
            .remove(id)
            .ok_or_else(|| DashboardError::view_not_found(id.to_string()))?;

        debug!(view_id = %id, "View unmounted");
        Ok(session)
    }

    /// Drop every view idle for at least `idle_ttl` at `now`
    pub fn evict_idle(&self, now: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| !session.is_idle(now, self.idle_ttl));

        let evicted = before.saturating_sub(self.sessions.len());
        if evicted > 0 {
            info!(evicted, mounted = self.sessions.len(), "Dropped idle views");
        }
        evicted
    }

    /// Sweep idle views every `idle_ttl` until the registry is dropped
    pub fn spawn_sweeper(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let registry: Weak<Self> = Arc::downgrade(self);
        let period = self.idle_ttl.max(Duration::from_secs(1));

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                match registry.upgrade() {
                    Some(registry) => {
                        registry.evict_idle(Utc::now());
                    }
                    None => break,
                }
            }
        })
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn max_views(&self) -> usize {
        self.max_views
    }

    pub fn idle_ttl(&self) -> Duration {
        self.idle_ttl
    }
}
