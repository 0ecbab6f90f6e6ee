// ============================================================================
// NOTIFICATION QUEUE - Capped queue of ephemeral user messages
// ============================================================================

use crate::config::NotificationConfig;
use crate::models::{Notification, Severity};

/// The notifier every sync engine feeds. At most `max_visible` live
/// notifications; overflow drops the oldest first. Expiry (4s per entry)
/// is wired by the use_notifications hook, dismissal by id happens here.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
    max_visible: usize,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            max_visible: NotificationConfig::default().max_visible,
        }
    }

    /// Enqueue a message and return its id (used to cancel it later).
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.items.push(Notification {
            id,
            message: message.into(),
            severity,
            created_at: chrono::Utc::now().timestamp_millis(),
        });

        // FIFO truncation: keep the most recent max_visible
        if self.items.len() > self.max_visible {
            let excess = self.items.len() - self.max_visible;
            self.items.drain(0..excess);
        }

        id
    }

    /// Remove a notification, either on expiry or on explicit dismissal.
    /// Removing an id that already aged out is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_keeps_the_five_most_recent() {
        let mut queue = NotificationQueue::new();
        for i in 0..7 {
            queue.notify(format!("message {}", i), Severity::Info);
        }
        assert_eq!(queue.len(), 5);
        let messages: Vec<&str> = queue.items().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["message 2", "message 3", "message 4", "message 5", "message 6"]
        );
    }

    #[test]
    fn dismiss_removes_only_the_given_id() {
        let mut queue = NotificationQueue::new();
        let first = queue.notify("one", Severity::Success);
        let second = queue.notify("two", Severity::Warning);

        queue.dismiss(first);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.items()[0].id, second);

        // double dismissal is harmless
        queue.dismiss(first);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut queue = NotificationQueue::new();
        let a = queue.notify("a", Severity::Price);
        let b = queue.notify("b", Severity::Price);
        assert!(b > a);
    }
}
