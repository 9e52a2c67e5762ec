//! Committee evaluation aggregate.
//!
//! One evaluator submits at most one evaluation per initiative. Subtotals
//! and the total are always the arithmetic sums of their inputs; the
//! individual approval flag is `total >= threshold && !veto`.

use serde::{Deserialize, Serialize};

use super::dimensions::DimensionScores;
use crate::domain::foundation::{EvaluationId, InitiativeId, Timestamp, UserId};

/// One evaluator's verdict on an initiative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitteeEvaluation {
    id: EvaluationId,
    initiative_id: InitiativeId,
    evaluator_id: UserId,
    scores: DimensionScores,
    total: u8,
    veto: bool,
    veto_reason: Option<String>,
    notes: Option<String>,
    recommendations: Option<String>,
    approved: bool,
    evaluated_at: Timestamp,
    revised_at: Option<Timestamp>,
}

impl CommitteeEvaluation {
    /// Creates a new evaluation with derived totals.
    ///
    /// `threshold` is the configured committee approval threshold; the
    /// individual approval flag is derived from it at submission time.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: EvaluationId,
        initiative_id: InitiativeId,
        evaluator_id: UserId,
        scores: DimensionScores,
        veto: bool,
        veto_reason: Option<String>,
        notes: Option<String>,
        recommendations: Option<String>,
        threshold: f64,
    ) -> Self {
        let total = scores.total();
        Self {
            id,
            initiative_id,
            evaluator_id,
            scores,
            total,
            veto,
            veto_reason,
            notes,
            recommendations,
            approved: Self::is_approved(total, veto, threshold),
            evaluated_at: Timestamp::now(),
            revised_at: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &EvaluationId {
        &self.id
    }

    pub fn initiative_id(&self) -> &InitiativeId {
        &self.initiative_id
    }

    pub fn evaluator_id(&self) -> &UserId {
        &self.evaluator_id
    }

    pub fn scores(&self) -> &DimensionScores {
        &self.scores
    }

    /// Derived total (0-100).
    pub fn total(&self) -> u8 {
        self.total
    }

    pub fn veto(&self) -> bool {
        self.veto
    }

    pub fn veto_reason(&self) -> Option<&str> {
        self.veto_reason.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn recommendations(&self) -> Option<&str> {
        self.recommendations.as_deref()
    }

    /// Individual approval: `total >= threshold && !veto` at submission.
    pub fn approved(&self) -> bool {
        self.approved
    }

    pub fn evaluated_at(&self) -> &Timestamp {
        &self.evaluated_at
    }

    pub fn revised_at(&self) -> Option<&Timestamp> {
        self.revised_at.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces the evaluation contents, recomputing totals wholesale.
    ///
    /// Used when the original evaluator revises their sheet before the
    /// round closes; the revision timestamp is stamped.
    pub fn revise(
        &mut self,
        scores: DimensionScores,
        veto: bool,
        veto_reason: Option<String>,
        notes: Option<String>,
        recommendations: Option<String>,
        threshold: f64,
    ) {
        self.scores = scores;
        self.total = scores.total();
        self.veto = veto;
        self.veto_reason = veto_reason;
        self.notes = notes;
        self.recommendations = recommendations;
        self.approved = Self::is_approved(self.total, veto, threshold);
        self.revised_at = Some(Timestamp::now());
    }

    fn is_approved(total: u8, veto: bool, threshold: f64) -> bool {
        f64::from(total) >= threshold && !veto
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::evaluation::dimensions::{
        EconomicScores, JustificationScores, TechnicalScores,
    };

    fn scores(j: [u8; 3], t: [u8; 4], e: [u8; 3]) -> DimensionScores {
        DimensionScores {
            justification: JustificationScores::new(j[0], j[1], j[2]).unwrap(),
            technical: TechnicalScores::new(t[0], t[1], t[2], t[3]).unwrap(),
            economic: EconomicScores::new(e[0], e[1], e[2]).unwrap(),
        }
    }

    fn evaluation(scores: DimensionScores, veto: bool) -> CommitteeEvaluation {
        CommitteeEvaluation::new(
            EvaluationId::new(),
            InitiativeId::new(),
            UserId::new("expert-1").unwrap(),
            scores,
            veto,
            None,
            None,
            None,
            80.0,
        )
    }

    #[test]
    fn total_is_sum_of_subtotals() {
        let ev = evaluation(scores([10, 12, 9], [13, 8, 9, 4], [8, 9, 3]), false);
        assert_eq!(ev.total(), 85);
    }

    #[test]
    fn total_at_threshold_is_approved() {
        let ev = evaluation(scores([10, 12, 8], [12, 8, 9, 4], [8, 6, 3]), false);
        assert_eq!(ev.total(), 80);
        assert!(ev.approved());
    }

    #[test]
    fn total_below_threshold_is_not_approved() {
        let ev = evaluation(scores([5, 8, 6], [10, 6, 7, 3], [6, 6, 3]), false);
        assert_eq!(ev.total(), 60);
        assert!(!ev.approved());
    }

    #[test]
    fn veto_blocks_individual_approval_regardless_of_total() {
        let ev = evaluation(scores([10, 15, 10], [15, 10, 10, 5], [10, 10, 5]), true);
        assert_eq!(ev.total(), 100);
        assert!(!ev.approved());
    }

    #[test]
    fn revise_recomputes_totals_and_stamps_revision() {
        let mut ev = evaluation(scores([5, 8, 6], [10, 6, 7, 3], [6, 6, 3]), false);
        assert!(ev.revised_at().is_none());

        ev.revise(
            scores([10, 14, 9], [14, 9, 9, 5], [9, 9, 4]),
            false,
            None,
            Some("revised after clarification".to_string()),
            None,
            80.0,
        );
        assert_eq!(ev.total(), 92);
        assert!(ev.approved());
        assert!(ev.revised_at().is_some());
    }
}
