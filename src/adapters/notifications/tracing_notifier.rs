//! Tracing-backed notification sink.
//!
//! Emits every governance event as a structured tracing event. Useful as
//! the default sink when no external delivery channel is wired up.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tracing::info;

use crate::domain::foundation::DomainError;
use crate::ports::Notifier;

/// Notifier that logs events through `tracing`.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Creates the sink.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, event_type: &str, payload: JsonValue) -> Result<(), DomainError> {
        info!(event_type, %payload, "governance event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn tracing_notifier_always_accepts() {
        let notifier = TracingNotifier::new();
        let result = notifier
            .notify("initiative.submitted", json!({"code": "INI-1"}))
            .await;
        assert!(result.is_ok());
    }
}
