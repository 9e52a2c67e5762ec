//! Domain events emitted by budget operations.

use serde::{Deserialize, Serialize};

use super::alerts::{AlertKind, AlertSeverity};
use super::change_request::ChangeType;
use super::niif::ClassificationSummary;
use crate::domain::foundation::{
    ChangeRequestId, EventId, Money, Period, ProjectId, Timestamp, UserId,
};
use crate::domain_event;

/// A budget change was requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetChangeRequested {
    pub event_id: EventId,
    pub change_request_id: ChangeRequestId,
    pub project_id: ProjectId,
    pub change_type: ChangeType,
    pub requested_amount: Money,
    pub requested_by: UserId,
    pub occurred_at: Timestamp,
}

domain_event!(
    BudgetChangeRequested,
    event_type = "budget.change_requested",
    aggregate_id = change_request_id,
    aggregate_type = "BudgetChangeRequest",
    occurred_at = occurred_at,
    event_id = event_id
);

/// A budget change was approved and applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetChangeApproved {
    pub event_id: EventId,
    pub change_request_id: ChangeRequestId,
    pub project_id: ProjectId,
    pub change_type: ChangeType,
    pub approved_amount: Money,
    pub new_approved_capex: Money,
    pub resolved_by: UserId,
    pub occurred_at: Timestamp,
}

domain_event!(
    BudgetChangeApproved,
    event_type = "budget.change_approved",
    aggregate_id = change_request_id,
    aggregate_type = "BudgetChangeRequest",
    occurred_at = occurred_at,
    event_id = event_id
);

/// A budget change was rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetChangeRejected {
    pub event_id: EventId,
    pub change_request_id: ChangeRequestId,
    pub project_id: ProjectId,
    pub resolved_by: UserId,
    pub occurred_at: Timestamp,
}

domain_event!(
    BudgetChangeRejected,
    event_type = "budget.change_rejected",
    aggregate_id = change_request_id,
    aggregate_type = "BudgetChangeRequest",
    occurred_at = occurred_at,
    event_id = event_id
);

/// Monthly execution was recorded for a period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRecorded {
    pub event_id: EventId,
    pub project_id: ProjectId,
    pub period: Period,
    pub executed_capex: Money,
    pub cumulative_executed: Money,
    pub occurred_at: Timestamp,
}

domain_event!(
    ExecutionRecorded,
    event_type = "budget.execution_recorded",
    aggregate_id = project_id,
    aggregate_type = "Budget",
    occurred_at = occurred_at,
    event_id = event_id
);

/// A batch of expenses was classified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpensesClassified {
    pub event_id: EventId,
    pub project_id: ProjectId,
    pub line_count: usize,
    pub summary: ClassificationSummary,
    pub occurred_at: Timestamp,
}

domain_event!(
    ExpensesClassified,
    event_type = "budget.expenses_classified",
    aggregate_id = project_id,
    aggregate_type = "Budget",
    occurred_at = occurred_at,
    event_id = event_id
);

/// An overrun alert was raised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetAlertRaised {
    pub event_id: EventId,
    pub project_id: ProjectId,
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub message: String,
    pub occurred_at: Timestamp,
}

domain_event!(
    BudgetAlertRaised,
    event_type = "budget.alert_raised",
    aggregate_id = project_id,
    aggregate_type = "Budget",
    occurred_at = occurred_at,
    event_id = event_id
);
