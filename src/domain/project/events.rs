//! Domain events emitted by project operations.

use serde::{Deserialize, Serialize};

use super::health::HealthSignal;
use super::status::ProjectStatus;
use crate::domain::foundation::{EventId, InitiativeId, Money, ProjectId, Timestamp, UserId};
use crate::domain_event;

/// A project was spawned from an approved initiative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreated {
    pub event_id: EventId,
    pub project_id: ProjectId,
    pub initiative_id: InitiativeId,
    pub code: String,
    pub assigned_budget: Money,
    pub occurred_at: Timestamp,
}

domain_event!(
    ProjectCreated,
    event_type = "project.created",
    aggregate_id = project_id,
    aggregate_type = "Project",
    occurred_at = occurred_at,
    event_id = event_id
);

/// A project entered execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectActivated {
    pub event_id: EventId,
    pub project_id: ProjectId,
    pub actor: UserId,
    pub budget_created: bool,
    pub assigned_budget: Money,
    pub occurred_at: Timestamp,
}

domain_event!(
    ProjectActivated,
    event_type = "project.activated",
    aggregate_id = project_id,
    aggregate_type = "Project",
    occurred_at = occurred_at,
    event_id = event_id
);

/// A project changed lifecycle state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectStateChanged {
    pub event_id: EventId,
    pub project_id: ProjectId,
    pub previous: ProjectStatus,
    pub next: ProjectStatus,
    pub actor: UserId,
    pub occurred_at: Timestamp,
}

domain_event!(
    ProjectStateChanged,
    event_type = "project.state_changed",
    aggregate_id = project_id,
    aggregate_type = "Project",
    occurred_at = occurred_at,
    event_id = event_id
);

/// A project was completed and closed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectClosed {
    pub event_id: EventId,
    pub project_id: ProjectId,
    pub actor: UserId,
    pub occurred_at: Timestamp,
}

domain_event!(
    ProjectClosed,
    event_type = "project.closed",
    aggregate_id = project_id,
    aggregate_type = "Project",
    occurred_at = occurred_at,
    event_id = event_id
);

/// The health traffic light changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectHealthChanged {
    pub event_id: EventId,
    pub project_id: ProjectId,
    pub previous: HealthSignal,
    pub next: HealthSignal,
    pub actor: UserId,
    pub occurred_at: Timestamp,
}

domain_event!(
    ProjectHealthChanged,
    event_type = "project.health_changed",
    aggregate_id = project_id,
    aggregate_type = "Project",
    occurred_at = occurred_at,
    event_id = event_id
);
