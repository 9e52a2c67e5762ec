//! Project lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle states of a project spawned from an approved initiative.
///
/// Projects wait in the reserve bank, may be scheduled into an annual
/// plan, and run to completion once activated. A paused project can
/// resume; cancellation and completion are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    ReserveBank,
    AnnualPlan,
    InExecution,
    Paused,
    Cancelled,
    Completed,
}

impl ProjectStatus {
    /// Returns true when the project can be activated into execution.
    pub fn is_activatable(&self) -> bool {
        matches!(self, ProjectStatus::ReserveBank | ProjectStatus::AnnualPlan)
    }

    /// Returns the wire label for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::ReserveBank => "reserve_bank",
            ProjectStatus::AnnualPlan => "annual_plan",
            ProjectStatus::InExecution => "in_execution",
            ProjectStatus::Paused => "paused",
            ProjectStatus::Cancelled => "cancelled",
            ProjectStatus::Completed => "completed",
        }
    }
}

impl StateMachine for ProjectStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ProjectStatus::*;
        matches!(
            (self, target),
            (ReserveBank, AnnualPlan)
                | (ReserveBank, InExecution)
                | (AnnualPlan, InExecution)
                | (AnnualPlan, ReserveBank)
                | (InExecution, Paused)
                | (InExecution, Cancelled)
                | (InExecution, Completed)
                | (Paused, InExecution)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ProjectStatus::*;
        match self {
            ReserveBank => vec![AnnualPlan, InExecution],
            AnnualPlan => vec![InExecution, ReserveBank],
            InExecution => vec![Paused, Cancelled, Completed],
            Paused => vec![InExecution],
            Cancelled => vec![],
            Completed => vec![],
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_is_allowed_from_bank_and_plan() {
        assert!(ProjectStatus::ReserveBank.can_transition_to(&ProjectStatus::InExecution));
        assert!(ProjectStatus::AnnualPlan.can_transition_to(&ProjectStatus::InExecution));
        assert!(ProjectStatus::ReserveBank.is_activatable());
        assert!(ProjectStatus::AnnualPlan.is_activatable());
        assert!(!ProjectStatus::Paused.is_activatable());
    }

    #[test]
    fn paused_can_only_resume() {
        assert_eq!(
            ProjectStatus::Paused.valid_transitions(),
            vec![ProjectStatus::InExecution]
        );
    }

    #[test]
    fn cancelled_and_completed_are_terminal() {
        assert!(ProjectStatus::Cancelled.is_terminal());
        assert!(ProjectStatus::Completed.is_terminal());
    }

    #[test]
    fn plan_assignment_is_reversible() {
        assert!(ProjectStatus::ReserveBank.can_transition_to(&ProjectStatus::AnnualPlan));
        assert!(ProjectStatus::AnnualPlan.can_transition_to(&ProjectStatus::ReserveBank));
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::ReserveBank).unwrap(),
            "\"reserve_bank\""
        );
        assert_eq!(
            serde_json::to_string(&ProjectStatus::InExecution).unwrap(),
            "\"in_execution\""
        );
    }
}
