//! SubmitEvaluationHandler - Command handler for committee submissions.

use std::sync::Arc;

use crate::config::GovernanceConfig;
use crate::domain::evaluation::{
    CommitteeEvaluation, DimensionScores, EconomicScores, EvaluationError, EvaluationSubmitted,
    JustificationScores, TechnicalScores,
};
use crate::domain::foundation::{
    Actor, DomainError, ErrorCode, EventId, EvaluationId, InitiativeId, Timestamp,
    ValidationError,
};
use crate::domain::initiative::InitiativeStatus;
use crate::ports::{notify_event, EvaluationRepository, InitiativeRepository, Notifier};

/// Raw evaluation sheet as submitted by one committee expert.
#[derive(Debug, Clone)]
pub struct SubmitEvaluationCommand {
    pub initiative_id: InitiativeId,
    pub evaluator: Actor,
    // Dimension 1: justification and benefits
    pub problem_clarity: u8,
    pub quantified_benefits: u8,
    pub strategic_alignment: u8,
    // Dimension 2: technical solution
    pub architecture: u8,
    pub integration: u8,
    pub security: u8,
    pub scalability: u8,
    // Dimension 3: economic analysis
    pub detailed_budget: u8,
    pub roi_tco: u8,
    pub financial_risk: u8,
    pub veto: bool,
    pub veto_reason: Option<String>,
    pub notes: Option<String>,
    pub recommendations: Option<String>,
}

impl SubmitEvaluationCommand {
    /// Validates the sheet into bounded dimension scores.
    pub fn scores(&self) -> Result<DimensionScores, ValidationError> {
        Ok(DimensionScores {
            justification: JustificationScores::new(
                self.problem_clarity,
                self.quantified_benefits,
                self.strategic_alignment,
            )?,
            technical: TechnicalScores::new(
                self.architecture,
                self.integration,
                self.security,
                self.scalability,
            )?,
            economic: EconomicScores::new(
                self.detailed_budget,
                self.roi_tco,
                self.financial_risk,
            )?,
        })
    }
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitEvaluationResult {
    pub evaluation: CommitteeEvaluation,
}

/// Handler for committee evaluation submissions.
///
/// The initiative must be in evaluation, and the repository's uniqueness
/// guarantee makes the second submission by the same evaluator fail
/// rather than overwrite.
pub struct SubmitEvaluationHandler {
    initiatives: Arc<dyn InitiativeRepository>,
    evaluations: Arc<dyn EvaluationRepository>,
    notifier: Arc<dyn Notifier>,
    config: GovernanceConfig,
}

impl SubmitEvaluationHandler {
    pub fn new(
        initiatives: Arc<dyn InitiativeRepository>,
        evaluations: Arc<dyn EvaluationRepository>,
        notifier: Arc<dyn Notifier>,
        config: GovernanceConfig,
    ) -> Self {
        Self {
            initiatives,
            evaluations,
            notifier,
            config,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitEvaluationCommand,
    ) -> Result<SubmitEvaluationResult, EvaluationError> {
        let initiative = self
            .initiatives
            .find_by_id(&cmd.initiative_id)
            .await?
            .ok_or(EvaluationError::InitiativeNotFound(cmd.initiative_id))?;

        if initiative.status() != InitiativeStatus::InEvaluation {
            return Err(EvaluationError::NotInEvaluation(
                initiative.status().to_string(),
            ));
        }

        let scores = cmd
            .scores()
            .map_err(|e| EvaluationError::from(DomainError::from(e)))?;

        let evaluation = CommitteeEvaluation::new(
            EvaluationId::new(),
            cmd.initiative_id,
            cmd.evaluator.user_id().clone(),
            scores,
            cmd.veto,
            cmd.veto_reason,
            cmd.notes,
            cmd.recommendations,
            self.config.committee_approval_threshold,
        );

        match self.evaluations.insert_new(&evaluation).await {
            Ok(()) => {}
            Err(err) if err.code == ErrorCode::DuplicateEvaluation => {
                return Err(EvaluationError::duplicate(
                    cmd.initiative_id,
                    cmd.evaluator.user_id().clone(),
                ));
            }
            Err(err) => return Err(err.into()),
        }

        let event = EvaluationSubmitted {
            event_id: EventId::new(),
            evaluation_id: *evaluation.id(),
            initiative_id: cmd.initiative_id,
            evaluator_id: cmd.evaluator.user_id().clone(),
            total: evaluation.total(),
            veto: evaluation.veto(),
            occurred_at: Timestamp::now(),
        };
        notify_event(self.notifier.as_ref(), &event).await;

        Ok(SubmitEvaluationResult { evaluation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::evaluation::test_support::{
        expert, fixture, seed_in_evaluation, sheet,
    };
    use crate::domain::foundation::{Money, Percentage, UserId};
    use crate::domain::initiative::Initiative;

    #[tokio::test]
    async fn submission_derives_totals_and_approval() {
        let fix = fixture();
        let id = seed_in_evaluation(&fix).await;

        let result = fix
            .handler
            .handle(sheet(id, expert("expert-1"), false))
            .await
            .unwrap();

        // 30 + 35 + 20 = 85
        assert_eq!(result.evaluation.total(), 85);
        assert!(result.evaluation.approved());
        assert!(fix.notifier.has_event("evaluation.submitted"));
    }

    #[tokio::test]
    async fn second_submission_by_same_evaluator_is_duplicate() {
        let fix = fixture();
        let id = seed_in_evaluation(&fix).await;

        fix.handler
            .handle(sheet(id, expert("expert-1"), false))
            .await
            .unwrap();
        let err = fix
            .handler
            .handle(sheet(id, expert("expert-1"), false))
            .await
            .unwrap_err();

        assert!(matches!(err, EvaluationError::Duplicate { .. }));
        assert_eq!(
            fix.evaluations.list_for_initiative(&id).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn different_evaluators_may_all_submit() {
        let fix = fixture();
        let id = seed_in_evaluation(&fix).await;

        for name in ["expert-1", "expert-2", "expert-3"] {
            fix.handler
                .handle(sheet(id, expert(name), false))
                .await
                .unwrap();
        }
        assert_eq!(
            fix.evaluations.list_for_initiative(&id).await.unwrap().len(),
            3
        );
    }

    #[tokio::test]
    async fn out_of_range_sub_score_is_invalid_input() {
        let fix = fixture();
        let id = seed_in_evaluation(&fix).await;

        let mut cmd = sheet(id, expert("expert-1"), false);
        cmd.quantified_benefits = 16; // max 15
        let err = fix.handler.handle(cmd).await.unwrap_err();
        assert!(matches!(err, EvaluationError::ValidationFailed { .. }));
    }

    #[tokio::test]
    async fn initiative_outside_evaluation_stage_is_rejected() {
        let fix = fixture();
        let initiative = Initiative::new(
            InitiativeId::new(),
            "Too early".to_string(),
            "Still a draft".to_string(),
            "Operations".to_string(),
            Money::from_major(1_000),
            Percentage::ZERO,
            UserId::new("requester-1").unwrap(),
            &GovernanceConfig::default().investment_bands(),
        )
        .unwrap();
        let id = *initiative.id();
        fix.initiatives.save(&initiative).await.unwrap();

        let err = fix
            .handler
            .handle(sheet(id, expert("expert-1"), false))
            .await
            .unwrap_err();
        assert!(matches!(err, EvaluationError::NotInEvaluation(_)));
    }

    #[tokio::test]
    async fn unknown_initiative_fails_with_not_found() {
        let fix = fixture();
        let err = fix
            .handler
            .handle(sheet(InitiativeId::new(), expert("expert-1"), false))
            .await
            .unwrap_err();
        assert!(matches!(err, EvaluationError::InitiativeNotFound(_)));
    }

    #[tokio::test]
    async fn veto_submission_is_stored_unapproved() {
        let fix = fixture();
        let id = seed_in_evaluation(&fix).await;

        let result = fix
            .handler
            .handle(sheet(id, expert("expert-1"), true))
            .await
            .unwrap();
        assert!(result.evaluation.veto());
        assert!(!result.evaluation.approved());
    }
}
