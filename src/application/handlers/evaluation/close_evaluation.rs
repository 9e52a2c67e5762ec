//! CloseEvaluationHandler - Command handler resolving an evaluation round.
//!
//! Any veto rejects outright; otherwise the arithmetic mean of the
//! submitted totals decides against the configured threshold. Approval
//! transitions the initiative and spawns the project in the reserve bank
//! within the same unit of work; the optimistic version check on the
//! initiative plus the one-project-per-initiative rule keep two racing
//! closes from both spawning.

use std::sync::Arc;

use crate::config::GovernanceConfig;
use crate::domain::evaluation::{
    resolve_round, EvaluationError, EvaluationOutcome, EvaluationRoundClosed,
};
use crate::domain::foundation::{Actor, ErrorCode, EventId, InitiativeId, Timestamp};
use crate::domain::initiative::{Initiative, InitiativeStatus};
use crate::domain::project::{Project, ProjectCreated};
use crate::ports::{
    notify_event, EvaluationRepository, InitiativeRepository, Notifier, ProjectRepository,
};

/// Command to close the evaluation round of an initiative.
#[derive(Debug, Clone)]
pub struct CloseEvaluationCommand {
    pub initiative_id: InitiativeId,
    pub actor: Actor,
}

/// Result of a resolved round.
#[derive(Debug, Clone)]
pub struct CloseEvaluationResult {
    pub initiative: Initiative,
    pub outcome: EvaluationOutcome,
    /// Resolution message reporting the computed mean.
    pub message: String,
    /// Set when the round approved and spawned the project.
    pub project: Option<Project>,
}

/// Handler closing evaluation rounds.
pub struct CloseEvaluationHandler {
    initiatives: Arc<dyn InitiativeRepository>,
    evaluations: Arc<dyn EvaluationRepository>,
    projects: Arc<dyn ProjectRepository>,
    notifier: Arc<dyn Notifier>,
    config: GovernanceConfig,
}

impl CloseEvaluationHandler {
    pub fn new(
        initiatives: Arc<dyn InitiativeRepository>,
        evaluations: Arc<dyn EvaluationRepository>,
        projects: Arc<dyn ProjectRepository>,
        notifier: Arc<dyn Notifier>,
        config: GovernanceConfig,
    ) -> Self {
        Self {
            initiatives,
            evaluations,
            projects,
            notifier,
            config,
        }
    }

    pub async fn handle(
        &self,
        cmd: CloseEvaluationCommand,
    ) -> Result<CloseEvaluationResult, EvaluationError> {
        let mut initiative = self
            .initiatives
            .find_by_id(&cmd.initiative_id)
            .await?
            .ok_or(EvaluationError::InitiativeNotFound(cmd.initiative_id))?;

        if initiative.status() != InitiativeStatus::InEvaluation {
            return Err(EvaluationError::NotInEvaluation(
                initiative.status().to_string(),
            ));
        }

        let evaluations = self
            .evaluations
            .list_for_initiative(&cmd.initiative_id)
            .await?;

        let threshold = self.config.committee_approval_threshold;
        let outcome = match resolve_round(&evaluations, threshold) {
            Ok(outcome) => outcome,
            Err(err) if err.code == ErrorCode::NoEvaluations => {
                return Err(EvaluationError::NoEvaluations(cmd.initiative_id));
            }
            Err(err) => return Err(err.into()),
        };
        let message = outcome.message(threshold);

        let target = if outcome.is_approved() {
            InitiativeStatus::Approved
        } else {
            InitiativeStatus::Rejected
        };
        let record =
            initiative.transition(target, cmd.actor.user_id(), Some(message.clone()))?;

        // The version check serializes racing closes: the loser conflicts
        // here and never reaches the project spawn.
        self.initiatives.update(&initiative).await?;
        self.initiatives.append_transition(&record).await?;

        let project = if outcome.is_approved() {
            let project = Project::spawn_from(&initiative);
            self.projects.save_new(&project).await?;

            let event = ProjectCreated {
                event_id: EventId::new(),
                project_id: *project.id(),
                initiative_id: *initiative.id(),
                code: project.code().to_string(),
                assigned_budget: project.assigned_budget(),
                occurred_at: Timestamp::now(),
            };
            notify_event(self.notifier.as_ref(), &event).await;
            Some(project)
        } else {
            None
        };

        let event = EvaluationRoundClosed {
            event_id: EventId::new(),
            initiative_id: *initiative.id(),
            approved: outcome.is_approved(),
            vetoed: matches!(outcome, EvaluationOutcome::Vetoed { .. }),
            mean: outcome.mean(),
            evaluation_count: evaluations.len(),
            message: message.clone(),
            occurred_at: Timestamp::now(),
        };
        notify_event(self.notifier.as_ref(), &event).await;

        Ok(CloseEvaluationResult {
            initiative,
            outcome,
            message,
            project,
        })
    }
}
