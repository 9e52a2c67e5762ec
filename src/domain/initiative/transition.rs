//! Append-only audit trail of initiative state transitions.

use serde::{Deserialize, Serialize};

use super::InitiativeStatus;
use crate::domain::foundation::{InitiativeId, Timestamp, UserId};

/// One entry in an initiative's state history.
///
/// Records are written at every transition (and once at creation, with no
/// previous state) and are never updated or deleted. The sequence per
/// initiative is ordered by `occurred_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTransitionRecord {
    initiative_id: InitiativeId,
    previous: Option<InitiativeStatus>,
    next: InitiativeStatus,
    actor: UserId,
    comment: Option<String>,
    occurred_at: Timestamp,
}

impl StateTransitionRecord {
    /// Creates an audit record for a transition.
    pub fn new(
        initiative_id: InitiativeId,
        previous: Option<InitiativeStatus>,
        next: InitiativeStatus,
        actor: UserId,
        comment: Option<String>,
    ) -> Self {
        Self {
            initiative_id,
            previous,
            next,
            actor,
            comment,
            occurred_at: Timestamp::now(),
        }
    }

    /// Returns the initiative this record belongs to.
    pub fn initiative_id(&self) -> &InitiativeId {
        &self.initiative_id
    }

    /// Returns the previous state (None for the creation event).
    pub fn previous(&self) -> Option<InitiativeStatus> {
        self.previous
    }

    /// Returns the state entered.
    pub fn next(&self) -> InitiativeStatus {
        self.next
    }

    /// Returns who performed the transition.
    pub fn actor(&self) -> &UserId {
        &self.actor
    }

    /// Returns the transition comment, if any.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Returns when the transition happened.
    pub fn occurred_at(&self) -> &Timestamp {
        &self.occurred_at
    }
}
