//! Notification sink seam.
//!
//! The advisory layer reports outcomes as (title, message, severity) triples.
//! Delivery is fire-and-forget: there is no acknowledgement contract.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Receiver of human-readable notifications.
pub trait NotificationSink {
    fn notify(&mut self, title: &str, message: &str, severity: Severity);
}

impl<S> NotificationSink for &mut S
where
    S: NotificationSink + ?Sized,
{
    fn notify(&mut self, title: &str, message: &str, severity: Severity) {
        (**self).notify(title, message, severity)
    }
}

/// Sink that only logs; useful where no presentation layer is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, title: &str, message: &str, severity: Severity) {
        tracing::info!(severity = severity.as_str(), title, message, "notification");
    }
}

/// Sink that records everything it receives.
impl NotificationSink for Vec<(String, String, Severity)> {
    fn notify(&mut self, title: &str, message: &str, severity: Severity) {
        self.push((title.to_string(), message.to_string(), severity));
    }
}
