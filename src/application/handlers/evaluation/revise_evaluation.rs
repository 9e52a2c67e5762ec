//! ReviseEvaluationHandler - Command handler for evaluation revisions.
//!
//! An evaluator may rework their sheet while the round is still open.
//! Totals are recomputed wholesale and the revision timestamp stamped.

use std::sync::Arc;

use crate::config::GovernanceConfig;
use crate::domain::evaluation::{CommitteeEvaluation, EvaluationError, EvaluationRevised};
use crate::domain::foundation::{Actor, DomainError, EventId, Role, Timestamp};
use crate::domain::initiative::InitiativeStatus;
use crate::ports::{notify_event, EvaluationRepository, InitiativeRepository, Notifier};

use super::submit_evaluation::SubmitEvaluationCommand;

/// Command to revise a previously submitted evaluation. Carries the full
/// replacement sheet; the evaluator field identifies whose submission is
/// being revised.
#[derive(Debug, Clone)]
pub struct ReviseEvaluationCommand {
    /// The replacement sheet (same shape as a submission).
    pub sheet: SubmitEvaluationCommand,
    /// Who is performing the revision.
    pub actor: Actor,
}

/// Result of a successful revision.
#[derive(Debug, Clone)]
pub struct ReviseEvaluationResult {
    pub evaluation: CommitteeEvaluation,
}

/// Handler for evaluation revisions.
pub struct ReviseEvaluationHandler {
    initiatives: Arc<dyn InitiativeRepository>,
    evaluations: Arc<dyn EvaluationRepository>,
    notifier: Arc<dyn Notifier>,
    config: GovernanceConfig,
}

impl ReviseEvaluationHandler {
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
        cmd: ReviseEvaluationCommand,
    ) -> Result<ReviseEvaluationResult, EvaluationError> {
        let sheet = &cmd.sheet;

        // Only the original evaluator (or an administrator) may revise.
        if cmd.actor.user_id() != sheet.evaluator.user_id() && cmd.actor.role() != Role::Admin {
            return Err(EvaluationError::Forbidden(
                "Only the original evaluator may revise this evaluation".to_string(),
            ));
        }

        let initiative = self
            .initiatives
            .find_by_id(&sheet.initiative_id)
            .await?
            .ok_or(EvaluationError::InitiativeNotFound(sheet.initiative_id))?;

        if initiative.status() != InitiativeStatus::InEvaluation {
            return Err(EvaluationError::NotInEvaluation(
                initiative.status().to_string(),
            ));
        }

        let mut evaluation = self
            .evaluations
            .find_by_evaluator(&sheet.initiative_id, sheet.evaluator.user_id())
            .await?
            .ok_or_else(|| {
                EvaluationError::Forbidden(format!(
                    "Evaluator {} has no submission for initiative {}",
                    sheet.evaluator.user_id(),
                    sheet.initiative_id
                ))
            })?;

        let scores = sheet
            .scores()
            .map_err(|e| EvaluationError::from(DomainError::from(e)))?;

        evaluation.revise(
            scores,
            sheet.veto,
            sheet.veto_reason.clone(),
            sheet.notes.clone(),
            sheet.recommendations.clone(),
            self.config.committee_approval_threshold,
        );
        self.evaluations.update(&evaluation).await?;

        let event = EvaluationRevised {
            event_id: EventId::new(),
            evaluation_id: *evaluation.id(),
            initiative_id: sheet.initiative_id,
            evaluator_id: sheet.evaluator.user_id().clone(),
            total: evaluation.total(),
            veto: evaluation.veto(),
            occurred_at: Timestamp::now(),
        };
        notify_event(self.notifier.as_ref(), &event).await;

        Ok(ReviseEvaluationResult { evaluation })
    }
}
