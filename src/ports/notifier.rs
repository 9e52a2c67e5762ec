//! Notifier port - fire-and-forget event delivery.
//!
//! The core hands structured events to this sink and moves on. Delivery
//! failures are logged and swallowed; they never roll back governance
//! state and never surface as governance errors.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::warn;

use crate::domain::foundation::{DomainError, DomainEvent};

/// Port for dispatching notifications to the outside world.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one event payload.
    ///
    /// Implementations should be non-blocking and must not participate
    /// in the caller's transaction boundary.
    async fn notify(&self, event_type: &str, payload: JsonValue) -> Result<(), DomainError>;
}

/// Dispatches a domain event, swallowing (and logging) any failure.
///
/// This is the single funnel handlers use, so the fire-and-forget
/// contract holds everywhere.
pub async fn notify_event<E>(notifier: &dyn Notifier, event: &E)
where
    E: DomainEvent + Serialize,
{
    let payload = match serde_json::to_value(event) {
        Ok(payload) => payload,
        Err(err) => {
            warn!(
                event_type = event.event_type(),
                error = %err,
                "failed to serialize domain event; notification dropped"
            );
            return;
        }
    };

    if let Err(err) = notifier.notify(event.event_type(), payload).await {
        warn!(
            event_type = event.event_type(),
            aggregate_id = %event.aggregate_id(),
            error = %err,
            "notification dispatch failed; continuing"
        );
    }
}
