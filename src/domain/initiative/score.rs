//! Priority scoring engine.
//!
//! A pure clamp-and-sum over six bounded sub-scores. The total (0-38)
//! derives the priority tier used for portfolio ordering. Scores are
//! recomputed wholesale on every update, never patched incrementally.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Timestamp, UserId};

/// Maximum points for strategic focus alignment.
pub const MAX_FOCUS_ALIGNMENT: u8 = 4;
/// Maximum points for depth of contribution.
pub const MAX_DEPTH_OF_CONTRIBUTION: u8 = 8;
/// Maximum points for benefit type.
pub const MAX_BENEFIT_TYPE: u8 = 6;
/// Maximum points for organizational reach.
pub const MAX_ORGANIZATIONAL_REACH: u8 = 4;
/// Maximum points for urgency.
pub const MAX_URGENCY: u8 = 8;
/// Maximum points for technical feasibility.
pub const MAX_TECHNICAL_FEASIBILITY: u8 = 8;

/// Maximum attainable total (sum of all sub-score maxima).
pub const MAX_TOTAL: u8 = MAX_FOCUS_ALIGNMENT
    + MAX_DEPTH_OF_CONTRIBUTION
    + MAX_BENEFIT_TYPE
    + MAX_ORGANIZATIONAL_REACH
    + MAX_URGENCY
    + MAX_TECHNICAL_FEASIBILITY;

/// Raw sub-scores as supplied by the analyst.
///
/// Values above a dimension's maximum are clamped, not rejected: the
/// scoring sheet treats anything past the ceiling as the ceiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreInput {
    pub focus_alignment: u8,
    pub depth_of_contribution: u8,
    pub benefit_type: u8,
    pub organizational_reach: u8,
    pub urgency: u8,
    pub technical_feasibility: u8,
}

/// Priority tier derived from the score total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// 32-38 points.
    P1,
    /// 25-31 points.
    P2,
    /// 18-24 points.
    P3,
    /// 11-17 points.
    P4,
    /// 0-10 points.
    P5,
}

impl Priority {
    /// Derives the priority tier from a score total.
    pub fn from_total(total: u8) -> Self {
        match total {
            32.. => Priority::P1,
            25..=31 => Priority::P2,
            18..=24 => Priority::P3,
            11..=17 => Priority::P4,
            _ => Priority::P5,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
            Priority::P4 => "P4",
            Priority::P5 => "P5",
        };
        write!(f, "{}", s)
    }
}

/// Computed priority score for one initiative.
///
/// Holds the clamped sub-scores plus the derived total and tier, so the
/// stored record is always internally consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    focus_alignment: u8,
    depth_of_contribution: u8,
    benefit_type: u8,
    organizational_reach: u8,
    urgency: u8,
    technical_feasibility: u8,
    total: u8,
    priority: Priority,
    computed_by: Option<UserId>,
    computed_at: Timestamp,
}

impl Score {
    /// Computes a score from raw sub-scores, clamping each dimension.
    pub fn compute(input: ScoreInput, computed_by: Option<UserId>) -> Self {
        let focus_alignment = input.focus_alignment.min(MAX_FOCUS_ALIGNMENT);
        let depth_of_contribution = input.depth_of_contribution.min(MAX_DEPTH_OF_CONTRIBUTION);
        let benefit_type = input.benefit_type.min(MAX_BENEFIT_TYPE);
        let organizational_reach = input.organizational_reach.min(MAX_ORGANIZATIONAL_REACH);
        let urgency = input.urgency.min(MAX_URGENCY);
        let technical_feasibility = input.technical_feasibility.min(MAX_TECHNICAL_FEASIBILITY);

        let total = focus_alignment
            + depth_of_contribution
            + benefit_type
            + organizational_reach
            + urgency
            + technical_feasibility;

        Self {
            focus_alignment,
            depth_of_contribution,
            benefit_type,
            organizational_reach,
            urgency,
            technical_feasibility,
            total,
            priority: Priority::from_total(total),
            computed_by,
            computed_at: Timestamp::now(),
        }
    }

    /// Returns the clamped sub-scores as an input record.
    pub fn input(&self) -> ScoreInput {
        ScoreInput {
            focus_alignment: self.focus_alignment,
            depth_of_contribution: self.depth_of_contribution,
            benefit_type: self.benefit_type,
            organizational_reach: self.organizational_reach,
            urgency: self.urgency,
            technical_feasibility: self.technical_feasibility,
        }
    }

    /// Returns the derived total (0-38).
    pub fn total(&self) -> u8 {
        self.total
    }

    /// Returns the derived priority tier.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns who computed the score, when known.
    pub fn computed_by(&self) -> Option<&UserId> {
        self.computed_by.as_ref()
    }

    /// Returns when the score was computed.
    pub fn computed_at(&self) -> &Timestamp {
        &self.computed_at
    }
}
