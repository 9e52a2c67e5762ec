//! Project phases and milestones.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, Timestamp};

/// Execution state of a project phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Delayed,
}

/// One ordered phase of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub description: Option<String>,
    pub order: u32,
    pub planned_start: Option<Timestamp>,
    pub planned_end: Option<Timestamp>,
    pub actual_start: Option<Timestamp>,
    pub actual_end: Option<Timestamp>,
    pub percent_complete: Percentage,
    pub status: PhaseStatus,
}

impl Phase {
    /// Creates a pending phase at the given order.
    pub fn new(name: impl Into<String>, order: u32) -> Self {
        Self {
            name: name.into(),
            description: None,
            order,
            planned_start: None,
            planned_end: None,
            actual_start: None,
            actual_end: None,
            percent_complete: Percentage::ZERO,
            status: PhaseStatus::Pending,
        }
    }
}

/// A dated milestone, optionally attached to a phase by order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub description: Option<String>,
    pub phase_order: Option<u32>,
    pub planned_date: Timestamp,
    pub actual_date: Option<Timestamp>,
    pub completed: bool,
    pub evidence_url: Option<String>,
}

impl Milestone {
    /// Creates an open milestone for the planned date.
    pub fn new(name: impl Into<String>, planned_date: Timestamp) -> Self {
        Self {
            name: name.into(),
            description: None,
            phase_order: None,
            planned_date,
            actual_date: None,
            completed: false,
            evidence_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_phase_is_pending_at_zero_percent() {
        let phase = Phase::new("Analysis", 1);
        assert_eq!(phase.status, PhaseStatus::Pending);
        assert_eq!(phase.percent_complete, Percentage::ZERO);
        assert_eq!(phase.order, 1);
    }

    #[test]
    fn new_milestone_is_open() {
        let milestone = Milestone::new("Go-live", Timestamp::now());
        assert!(!milestone.completed);
        assert!(milestone.actual_date.is_none());
    }
}
