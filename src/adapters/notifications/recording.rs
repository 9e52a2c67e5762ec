//! Recording notification sink for tests.
//!
//! Captures every delivered event so tests can assert on what the
//! handlers emitted. Can be switched into a failing mode to exercise
//! the fire-and-forget contract.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::Notifier;

/// Notifier that records (event_type, payload) pairs.
#[derive(Default)]
pub struct RecordingNotifier {
    delivered: Mutex<Vec<(String, JsonValue)>>,
    fail: bool,
}

impl RecordingNotifier {
    /// Creates a recording sink that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that fails every delivery (still recording the
    /// attempt), for testing that failures never propagate.
    pub fn failing() -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Returns all recorded deliveries.
    pub fn delivered(&self) -> Vec<(String, JsonValue)> {
        self.delivered.lock().expect("notifier lock poisoned").clone()
    }

    /// Returns the recorded event types, in delivery order.
    pub fn event_types(&self) -> Vec<String> {
        self.delivered()
            .into_iter()
            .map(|(event_type, _)| event_type)
            .collect()
    }

    /// Returns true if an event of the given type was delivered.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.delivered().iter().any(|(t, _)| t == event_type)
    }

    /// Number of recorded deliveries.
    pub fn count(&self) -> usize {
        self.delivered.lock().expect("notifier lock poisoned").len()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, event_type: &str, payload: JsonValue) -> Result<(), DomainError> {
        self.delivered
            .lock()
            .expect("notifier lock poisoned")
            .push((event_type.to_string(), payload));

        if self.fail {
            return Err(DomainError::new(
                ErrorCode::NotificationError,
                "recording sink configured to fail",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn records_deliveries_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify("a", json!(1)).await.unwrap();
        notifier.notify("b", json!(2)).await.unwrap();

        assert_eq!(notifier.event_types(), vec!["a", "b"]);
        assert!(notifier.has_event("a"));
        assert!(!notifier.has_event("c"));
    }

    #[tokio::test]
    async fn failing_mode_records_then_errors() {
        let notifier = RecordingNotifier::failing();
        let result = notifier.notify("a", json!(1)).await;
        assert!(result.is_err());
        assert_eq!(notifier.count(), 1);
    }
}
