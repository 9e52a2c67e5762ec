//! Domain event infrastructure.
//!
//! Mutating handlers emit typed events through the `Notifier` port.
//! Delivery is fire-and-forget: a failed notification is logged and
//! swallowed, never surfaced as a governance error.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::Timestamp;

/// Unique identifier for an event instance (deduplication at the sink).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random EventId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trait that all domain events implement.
///
/// Use the `domain_event!` macro to implement this trait with minimal
/// boilerplate. Event payloads are the serialized event structs.
pub trait DomainEvent: Send + Sync {
    /// Returns the event type string (e.g., "initiative.submitted").
    /// Used for routing and filtering at the notification sink.
    fn event_type(&self) -> &'static str;

    /// Returns the ID of the aggregate that emitted this event.
    fn aggregate_id(&self) -> String;

    /// Returns the type of aggregate (e.g., "Initiative", "Project").
    fn aggregate_type(&self) -> &'static str;

    /// Returns when the event occurred.
    fn occurred_at(&self) -> Timestamp;

    /// Returns the unique ID for this event instance.
    fn event_id(&self) -> EventId;
}

/// Macro to implement DomainEvent with minimal boilerplate.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct InitiativeSubmitted {
///     pub event_id: EventId,
///     pub initiative_id: InitiativeId,
///     pub occurred_at: Timestamp,
/// }
///
/// domain_event!(
///     InitiativeSubmitted,
///     event_type = "initiative.submitted",
///     aggregate_id = initiative_id,
///     aggregate_type = "Initiative",
///     occurred_at = occurred_at,
///     event_id = event_id
/// );
/// ```
#[macro_export]
macro_rules! domain_event {
    (
        $event_name:ident,
        event_type = $event_type:expr,
        aggregate_id = $agg_id_field:ident,
        aggregate_type = $agg_type:expr,
        occurred_at = $occurred_field:ident,
        event_id = $event_id_field:ident
    ) => {
        impl $crate::domain::foundation::DomainEvent for $event_name {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn aggregate_id(&self) -> String {
                self.$agg_id_field.to_string()
            }

            fn aggregate_type(&self) -> &'static str {
                $agg_type
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.$occurred_field
            }

            fn event_id(&self) -> $crate::domain::foundation::EventId {
                self.$event_id_field
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::InitiativeId;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct TestEvent {
        event_id: EventId,
        initiative_id: InitiativeId,
        occurred_at: Timestamp,
    }

    domain_event!(
        TestEvent,
        event_type = "test.event",
        aggregate_id = initiative_id,
        aggregate_type = "Initiative",
        occurred_at = occurred_at,
        event_id = event_id
    );

    #[test]
    fn macro_implements_domain_event() {
        let event = TestEvent {
            event_id: EventId::new(),
            initiative_id: InitiativeId::new(),
            occurred_at: Timestamp::now(),
        };

        assert_eq!(event.event_type(), "test.event");
        assert_eq!(event.aggregate_type(), "Initiative");
        assert_eq!(event.aggregate_id(), event.initiative_id.to_string());
    }

    #[test]
    fn event_id_generates_unique_values() {
        assert_ne!(EventId::new(), EventId::new());
    }
}
