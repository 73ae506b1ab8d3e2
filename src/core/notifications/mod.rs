//! Notification channel
//!
//! Transient toast messages for the dashboard UI. Every message is broadcast
//! to live subscribers and kept in a bounded history so a client that polls
//! can still pick it up. Nothing is persisted.

mod types;


pub use types::{Notification, Severity};

use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;

/// Non-blocking toast publisher
#[derive(Debug, Clone)]
pub struct Notifier {
    sender: broadcast::Sender<Notification>,
    history: Arc<RwLock<VecDeque<Notification>>>,
    capacity: usize,
}

impl Notifier {
    /// Create a notifier keeping the last `capacity` messages
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);

        Self {
            sender,
            history: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn success(&self, message: impl Into<String>) -> Notification {
        self.publish(Severity::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Notification {
        self.publish(Severity::Error, message)
    }

    /// Record and broadcast a message; never blocks or fails
    pub fn publish(&self, severity: Severity, message: impl Into<String>) -> Notification {
        let notification = Notification::new(severity, message);

        {
            let mut history = self.history.write();
            if history.len() == self.capacity {
                history.pop_front();
            }
            history.push_back(notification.clone());
        }

        // No subscribers is fine
        let _ = self.sender.send(notification.clone());

        debug!(
            severity = ?notification.severity,
            message = %notification.message,
            "Notification published"
        );
        notification
    }

    /// Subscribe to messages published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    /// The most recent `limit` messages, oldest first
    pub fn recent(&self, limit: usize) -> Vec<Notification> {
        let history = self.history.read();
        let skip = history.len().saturating_sub(limit);
        history.iter().skip(skip).cloned().collect()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(crate::config::models::default_notification_history())
    }
}
