//! Evaluation round resolution.
//!
//! Veto is an absolute gate: one veto rejects the initiative no matter
//! what the scores say. Without a veto the round resolves on the
//! arithmetic mean of the submitted totals (submitted only, never
//! zero-padded for absent evaluators).

use serde::{Deserialize, Serialize};

use super::aggregate::CommitteeEvaluation;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Result of closing an evaluation round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EvaluationOutcome {
    /// Mean met the threshold and no veto was cast.
    Approved { mean: f64 },
    /// A veto was cast; the mean is reported for the audit trail.
    Vetoed { mean: f64 },
    /// No veto, but the mean fell short of the threshold.
    BelowThreshold { mean: f64 },
}

impl EvaluationOutcome {
    /// Returns true when the initiative is to be approved.
    pub fn is_approved(&self) -> bool {
        matches!(self, EvaluationOutcome::Approved { .. })
    }

    /// Returns the computed mean of the submitted totals.
    pub fn mean(&self) -> f64 {
        match self {
            EvaluationOutcome::Approved { mean }
            | EvaluationOutcome::Vetoed { mean }
            | EvaluationOutcome::BelowThreshold { mean } => *mean,
        }
    }

    /// Human-readable resolution message, reporting the computed mean.
    pub fn message(&self, threshold: f64) -> String {
        match self {
            EvaluationOutcome::Approved { mean } => format!(
                "Initiative approved with mean score {:.1}; project created in reserve bank",
                mean
            ),
            EvaluationOutcome::Vetoed { mean } => format!(
                "Initiative rejected by committee veto (mean score {:.1})",
                mean
            ),
            EvaluationOutcome::BelowThreshold { mean } => format!(
                "Initiative rejected: mean score {:.1} below required {:.1}",
                mean, threshold
            ),
        }
    }
}

/// Resolves an evaluation round against the approval threshold.
///
/// # Errors
///
/// - `NoEvaluations` when the round has zero submissions
pub fn resolve_round(
    evaluations: &[CommitteeEvaluation],
    threshold: f64,
) -> Result<EvaluationOutcome, DomainError> {
    if evaluations.is_empty() {
        return Err(DomainError::new(
            ErrorCode::NoEvaluations,
            "Cannot close an evaluation round with no submitted evaluations",
        ));
    }

    let mean = evaluations
        .iter()
        .map(|e| f64::from(e.total()))
        .sum::<f64>()
        / evaluations.len() as f64;

    if evaluations.iter().any(CommitteeEvaluation::veto) {
        return Ok(EvaluationOutcome::Vetoed { mean });
    }

    if mean >= threshold {
        Ok(EvaluationOutcome::Approved { mean })
    } else {
        Ok(EvaluationOutcome::BelowThreshold { mean })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::evaluation::dimensions::{
        DimensionScores, EconomicScores, JustificationScores, TechnicalScores,
    };
    use crate::domain::foundation::{EvaluationId, InitiativeId, UserId};

    fn evaluation_with_total(target: u8, veto: bool) -> CommitteeEvaluation {
        // Distribute the target across dimensions within their bounds.
        let mut remaining = target;
        let j = remaining.min(35);
        remaining -= j;
        let t = remaining.min(40);
        remaining -= t;
        let e = remaining.min(25);

        let scores = DimensionScores {
            justification: JustificationScores::new(j.min(10), (j.saturating_sub(10)).min(15), j.saturating_sub(25))
                .unwrap(),
            technical: TechnicalScores::new(
                t.min(15),
                (t.saturating_sub(15)).min(10),
                (t.saturating_sub(25)).min(10),
                t.saturating_sub(35),
            )
            .unwrap(),
            economic: EconomicScores::new(e.min(10), (e.saturating_sub(10)).min(10), e.saturating_sub(20))
                .unwrap(),
        };
        assert_eq!(scores.total(), target, "helper must hit the target total");

        CommitteeEvaluation::new(
            EvaluationId::new(),
            InitiativeId::new(),
            UserId::new(format!("expert-{}", EvaluationId::new())).unwrap(),
            scores,
            veto,
            None,
            None,
            None,
            80.0,
        )
    }

    #[test]
    fn empty_round_fails_with_no_evaluations() {
        let err = resolve_round(&[], 80.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::NoEvaluations);
    }

    #[test]
    fn mean_at_or_above_threshold_approves() {
        let evals = vec![
            evaluation_with_total(85, false),
            evaluation_with_total(90, false),
            evaluation_with_total(70, false),
        ];
        let outcome = resolve_round(&evals, 80.0).unwrap();
        assert!(outcome.is_approved());
        let expected = (85.0 + 90.0 + 70.0) / 3.0;
        assert!((outcome.mean() - expected).abs() < 1e-9);
        assert!(outcome.message(80.0).contains("81.7"));
    }

    #[test]
    fn mean_below_threshold_rejects() {
        let evals = vec![
            evaluation_with_total(75, false),
            evaluation_with_total(80, false),
        ];
        let outcome = resolve_round(&evals, 80.0).unwrap();
        assert_eq!(outcome, EvaluationOutcome::BelowThreshold { mean: 77.5 });
        assert!(!outcome.is_approved());
    }

    #[test]
    fn mean_exactly_at_threshold_approves() {
        let evals = vec![
            evaluation_with_total(70, false),
            evaluation_with_total(90, false),
        ];
        let outcome = resolve_round(&evals, 80.0).unwrap();
        assert!(outcome.is_approved());
        assert!((outcome.mean() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn single_veto_rejects_despite_high_mean() {
        let evals = vec![
            evaluation_with_total(100, false),
            evaluation_with_total(100, false),
            evaluation_with_total(95, true),
        ];
        let outcome = resolve_round(&evals, 80.0).unwrap();
        assert!(matches!(outcome, EvaluationOutcome::Vetoed { .. }));
        assert!(!outcome.is_approved());
    }

    #[test]
    fn mean_is_over_submitted_evaluations_only() {
        // One evaluation: the mean is that total, not a zero-padded panel.
        let evals = vec![evaluation_with_total(82, false)];
        let outcome = resolve_round(&evals, 80.0).unwrap();
        assert!(outcome.is_approved());
        assert!((outcome.mean() - 82.0).abs() < 1e-9);
    }
}
