//! Initiative lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle states of an investment initiative.
///
/// The happy path runs `Draft → Submitted → InReview → InEvaluation →
/// Approved → InReserveBank → InAnnualPlan → Activated`. Review and
/// evaluation may reject; a rejected initiative can be reopened as a
/// draft. `Activated` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitiativeStatus {
    Draft,
    Submitted,
    InReview,
    InEvaluation,
    Approved,
    Rejected,
    InReserveBank,
    InAnnualPlan,
    Activated,
}

impl InitiativeStatus {
    /// Returns true while content fields may still be edited.
    ///
    /// Activation freezes the initiative; only audit fields change after.
    pub fn is_editable(&self) -> bool {
        !matches!(self, InitiativeStatus::Activated)
    }

    /// Returns the wire label for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            InitiativeStatus::Draft => "draft",
            InitiativeStatus::Submitted => "submitted",
            InitiativeStatus::InReview => "in_review",
            InitiativeStatus::InEvaluation => "in_evaluation",
            InitiativeStatus::Approved => "approved",
            InitiativeStatus::Rejected => "rejected",
            InitiativeStatus::InReserveBank => "in_reserve_bank",
            InitiativeStatus::InAnnualPlan => "in_annual_plan",
            InitiativeStatus::Activated => "activated",
        }
    }
}

impl StateMachine for InitiativeStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use InitiativeStatus::*;
        matches!(
            (self, target),
            (Draft, Submitted)
                | (Submitted, InReview)
                | (Submitted, Rejected)
                | (InReview, InEvaluation)
                | (InReview, Rejected)
                | (InEvaluation, Approved)
                | (InEvaluation, Rejected)
                | (Approved, InReserveBank)
                | (InReserveBank, InAnnualPlan)
                | (InAnnualPlan, Activated)
                | (Rejected, Draft)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use InitiativeStatus::*;
        match self {
            Draft => vec![Submitted],
            Submitted => vec![InReview, Rejected],
            InReview => vec![InEvaluation, Rejected],
            InEvaluation => vec![Approved, Rejected],
            Approved => vec![InReserveBank],
            InReserveBank => vec![InAnnualPlan],
            InAnnualPlan => vec![Activated],
            Rejected => vec![Draft],
            Activated => vec![],
        }
    }
}

impl fmt::Display for InitiativeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [InitiativeStatus; 9] = [
        InitiativeStatus::Draft,
        InitiativeStatus::Submitted,
        InitiativeStatus::InReview,
        InitiativeStatus::InEvaluation,
        InitiativeStatus::Approved,
        InitiativeStatus::Rejected,
        InitiativeStatus::InReserveBank,
        InitiativeStatus::InAnnualPlan,
        InitiativeStatus::Activated,
    ];

    #[test]
    fn happy_path_edges_are_allowed() {
        use InitiativeStatus::*;
        let path = [
            Draft,
            Submitted,
            InReview,
            InEvaluation,
            Approved,
            InReserveBank,
            InAnnualPlan,
            Activated,
        ];
        for pair in path.windows(2) {
            assert!(
                pair[0].can_transition_to(&pair[1]),
                "{:?} -> {:?} should be allowed",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn rejected_can_only_reopen_as_draft() {
        assert_eq!(
            InitiativeStatus::Rejected.valid_transitions(),
            vec![InitiativeStatus::Draft]
        );
    }

    #[test]
    fn activated_is_terminal() {
        assert!(InitiativeStatus::Activated.is_terminal());
        for target in ALL {
            assert!(!InitiativeStatus::Activated.can_transition_to(&target));
        }
    }

    #[test]
    fn rejection_is_reachable_from_review_stages_only() {
        use InitiativeStatus::*;
        for status in ALL {
            let can_reject = status.can_transition_to(&Rejected);
            let expected = matches!(status, Submitted | InReview | InEvaluation);
            assert_eq!(can_reject, expected, "rejection from {:?}", status);
        }
    }

    #[test]
    fn draft_cannot_skip_to_evaluation() {
        assert!(!InitiativeStatus::Draft.can_transition_to(&InitiativeStatus::InEvaluation));
        assert!(!InitiativeStatus::Draft.can_transition_to(&InitiativeStatus::Approved));
    }

    #[test]
    fn only_activated_is_frozen() {
        for status in ALL {
            assert_eq!(
                status.is_editable(),
                status != InitiativeStatus::Activated,
                "editability of {:?}",
                status
            );
        }
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&InitiativeStatus::InReserveBank).unwrap(),
            "\"in_reserve_bank\""
        );
    }
}
