//! In-session notification center.
//!
//! Newest first. Implements [`NotificationSink`] so the advisory layer can
//! post into it directly.

use chrono::{DateTime, Utc};
use serde::Serialize;

use relaydesk_core::{NotificationId, NotificationSink, Severity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub severity: Severity,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, title: &str, message: &str, severity: Severity) -> NotificationId {
        let n = Notification {
            id: NotificationId::new(),
            title: title.to_string(),
            message: message.to_string(),
            severity,
            is_read: false,
            created_at: Utc::now(),
        };
        let id = n.id;
        self.items.insert(0, n);
        id
    }

    pub fn list(&self) -> &[Notification] {
        &self.items
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.first()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    /// Returns false if no notification has that id.
    pub fn mark_read(&mut self, id: NotificationId) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.is_read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.is_read = true;
        }
    }

    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl NotificationSink for NotificationCenter {
    fn notify(&mut self, title: &str, message: &str, severity: Severity) {
        tracing::debug!(severity = severity.as_str(), title, "notification posted");
        self.add(title, message, severity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first_and_unread_tracking() {
        let mut center = NotificationCenter::new();
        let first = center.add("a", "", Severity::Info);
        let second = center.add("b", "", Severity::Warning);

        assert_eq!(center.list()[0].id, second);
        assert_eq!(center.unread_count(), 2);

        assert!(center.mark_read(first));
        assert_eq!(center.unread_count(), 1);

        center.mark_all_read();
        assert_eq!(center.unread_count(), 0);
    }

    #[test]
    fn remove_and_clear() {
        let mut center = NotificationCenter::new();
        let id = center.add("a", "", Severity::Info);
        center.add("b", "", Severity::Error);

        assert!(center.remove(id));
        assert!(!center.remove(id));
        assert!(!center.mark_read(id));
        assert_eq!(center.list().len(), 1);

        center.clear();
        assert!(center.latest().is_none());
    }

    #[test]
    fn sink_posts_into_the_center() {
        let mut center = NotificationCenter::new();
        center.notify("权限不足", "x", Severity::Warning);
        let latest = center.latest().unwrap();
        assert_eq!(latest.severity, Severity::Warning);
        assert!(!latest.is_read);

        let json = serde_json::to_value(latest).unwrap();
        assert_eq!(json["type"], "warning");
        assert_eq!(json["isRead"], false);
    }
}
