//! User notification adapters.
//!
//! The denial toast is rendered client-side; the backend's notifier
//! implementations either log the event or record it for assertions.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::UserNotifier;

/// Notifier that emits a structured log line per denial.
#[derive(Debug, Default)]
pub struct TracingNotifier;

#[async_trait]
impl UserNotifier for TracingNotifier {
    async fn notify_access_denied(&self, message: &str) {
        tracing::info!("access denied notification: {message}");
    }
}

/// Notifier that records every message, for tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Creates an empty recording notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserNotifier for RecordingNotifier {
    async fn notify_access_denied(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn recording_notifier_captures_messages() {
        let notifier = RecordingNotifier::new();
        notifier.notify_access_denied("denied").await;
        assert_eq!(notifier.messages(), vec!["denied".to_string()]);
    }
}
