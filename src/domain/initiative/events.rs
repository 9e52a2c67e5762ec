//! Domain events emitted by initiative operations.

use serde::{Deserialize, Serialize};

use super::classification::{InvestmentClass, ReportType};
use super::score::Priority;
use super::status::InitiativeStatus;
use crate::domain::foundation::{EventId, InitiativeId, Money, Timestamp, UserId};
use crate::domain_event;

/// A new initiative entered the funnel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitiativeSubmitted {
    pub event_id: EventId,
    pub initiative_id: InitiativeId,
    pub code: String,
    pub title: String,
    pub requesting_area: String,
    pub estimated_amount: Money,
    pub classification: InvestmentClass,
    pub report_type: ReportType,
    pub created_by: UserId,
    pub occurred_at: Timestamp,
}

domain_event!(
    InitiativeSubmitted,
    event_type = "initiative.submitted",
    aggregate_id = initiative_id,
    aggregate_type = "Initiative",
    occurred_at = occurred_at,
    event_id = event_id
);

/// An initiative changed lifecycle state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitiativeStateChanged {
    pub event_id: EventId,
    pub initiative_id: InitiativeId,
    pub previous: Option<InitiativeStatus>,
    pub next: InitiativeStatus,
    pub actor: UserId,
    pub comment: Option<String>,
    pub forced: bool,
    pub occurred_at: Timestamp,
}

domain_event!(
    InitiativeStateChanged,
    event_type = "initiative.state_changed",
    aggregate_id = initiative_id,
    aggregate_type = "Initiative",
    occurred_at = occurred_at,
    event_id = event_id
);

/// Scoring and classification were recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitiativeReprocessed {
    pub event_id: EventId,
    pub initiative_id: InitiativeId,
    pub classification: InvestmentClass,
    pub report_type: ReportType,
    pub score_total: Option<u8>,
    pub priority: Option<Priority>,
    pub occurred_at: Timestamp,
}

domain_event!(
    InitiativeReprocessed,
    event_type = "initiative.reprocessed",
    aggregate_id = initiative_id,
    aggregate_type = "Initiative",
    occurred_at = occurred_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DomainEvent;

    #[test]
    fn state_changed_event_routes_by_type() {
        let event = InitiativeStateChanged {
            event_id: EventId::new(),
            initiative_id: InitiativeId::new(),
            previous: Some(InitiativeStatus::Draft),
            next: InitiativeStatus::Submitted,
            actor: UserId::new("u-1").unwrap(),
            comment: None,
            forced: false,
            occurred_at: Timestamp::now(),
        };
        assert_eq!(event.event_type(), "initiative.state_changed");
        assert_eq!(event.aggregate_type(), "Initiative");
    }
}
