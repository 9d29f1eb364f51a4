//! Notification sink for user-visible toasts.
//!
//! The core only needs a single fire-and-forget call; rendering is someone
//! else's problem. Per the error-handling rules, only resolution failures
//! produce a visible error notification.

use std::sync::Mutex;

/// Flavor of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// A success toast.
    Success,
    /// An error toast.
    Error,
}

/// Fire-and-forget sink for success/error toasts.
pub trait NotificationSink {
    /// Surfaces a notification to the user.
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// Default sink that routes notifications into the tracing pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Success => tracing::info!(toast = message, "Notification"),
            NotificationKind::Error => tracing::error!(toast = message, "Notification"),
        }
    }
}

/// Sink that records notifications for inspection; used by embedders that
/// render toasts themselves and by tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<(NotificationKind, String)>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and returns the recorded notifications.
    #[must_use]
    pub fn drain(&self) -> Vec<(NotificationKind, String)> {
        self.events
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, kind: NotificationKind, message: &str) {
        if let Ok(mut events) = self.events.lock() {
            events.push((kind, message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_drains() {
        let sink = RecordingSink::new();
        sink.notify(NotificationKind::Error, "superpower not found");
        sink.notify(NotificationKind::Success, "blik accepted");

        let events = sink.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, NotificationKind::Error);
        assert!(sink.drain().is_empty());
    }
}
