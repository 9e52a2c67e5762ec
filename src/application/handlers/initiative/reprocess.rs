//! ReprocessInitiativeHandler - Command handler re-running scoring and
//! classification after field updates.
//!
//! Scoring and classification are invoked together as a single reprocess
//! operation: classification depends on the amount and transformation
//! percentage, the score on the analyst sub-scores, and the stored
//! derived fields must never drift from their inputs.

use std::sync::Arc;

use crate::config::GovernanceConfig;
use crate::domain::foundation::{Actor, EventId, InitiativeId, Money, Percentage, Timestamp};
use crate::domain::initiative::{
    ContentUpdate, Initiative, InitiativeError, InitiativeReprocessed, InitiativeStatus, Score,
    ScoreInput,
};
use crate::ports::{notify_event, InitiativeRepository, Notifier};

/// Command to update initiative fields and recompute derived state.
#[derive(Debug, Clone, Default)]
pub struct ReprocessCommand {
    pub initiative_id: InitiativeId,
    pub content: Option<ContentUpdate>,
    pub estimated_amount: Option<Money>,
    pub transformation: Option<Percentage>,
    pub score: Option<ScoreInput>,
    pub actor: Option<Actor>,
}

/// Result of a successful reprocess.
#[derive(Debug, Clone)]
pub struct ReprocessResult {
    pub initiative: Initiative,
}

/// Handler re-running the scoring and classification engines.
pub struct ReprocessInitiativeHandler {
    repository: Arc<dyn InitiativeRepository>,
    notifier: Arc<dyn Notifier>,
    config: GovernanceConfig,
}

impl ReprocessInitiativeHandler {
    pub fn new(
        repository: Arc<dyn InitiativeRepository>,
        notifier: Arc<dyn Notifier>,
        config: GovernanceConfig,
    ) -> Self {
        Self {
            repository,
            notifier,
            config,
        }
    }

    pub async fn handle(&self, cmd: ReprocessCommand) -> Result<ReprocessResult, InitiativeError> {
        let mut initiative = self
            .repository
            .find_by_id(&cmd.initiative_id)
            .await?
            .ok_or(InitiativeError::NotFound(cmd.initiative_id))?;

        if let Some(content) = cmd.content {
            initiative.update_content(content)?;
        }

        if cmd.estimated_amount.is_some() || cmd.transformation.is_some() {
            let amount = cmd.estimated_amount.unwrap_or(initiative.estimated_amount());
            let transformation = cmd.transformation.unwrap_or(initiative.transformation());
            initiative.update_financials(amount, transformation, &self.config.investment_bands())?;
        } else {
            // Classification is recomputed even without input changes so a
            // threshold change in configuration takes effect on reprocess.
            if !initiative.is_editable() {
                return Err(InitiativeError::Activated);
            }
            initiative.reclassify(&self.config.investment_bands());
        }

        let mut scored = false;
        if let Some(input) = cmd.score {
            let computed_by = cmd.actor.as_ref().map(|a| a.user_id().clone());
            initiative.apply_score(Score::compute(input, computed_by))?;
            scored = true;
        }

        // Scoring a freshly submitted initiative pulls it into review.
        if scored && initiative.status() == InitiativeStatus::Submitted {
            if let Some(actor) = &cmd.actor {
                let record = initiative.transition(
                    InitiativeStatus::InReview,
                    actor.user_id(),
                    Some("Scoring computed".to_string()),
                )?;
                self.repository.append_transition(&record).await?;
            }
        }

        self.repository.update(&initiative).await?;

        let event = InitiativeReprocessed {
            event_id: EventId::new(),
            initiative_id: *initiative.id(),
            classification: initiative.classification(),
            report_type: initiative.report_type(),
            score_total: initiative.score().map(Score::total),
            priority: initiative.score().map(Score::priority),
            occurred_at: Timestamp::now(),
        };
        notify_event(self.notifier.as_ref(), &event).await;

        Ok(ReprocessResult { initiative })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryInitiativeRepository;
    use crate::adapters::notifications::RecordingNotifier;
    use crate::domain::foundation::{Role, UserId};
    use crate::domain::initiative::{InvestmentClass, Priority, ReportType};

    struct Fixture {
        repo: Arc<InMemoryInitiativeRepository>,
        handler: ReprocessInitiativeHandler,
    }

    fn fixture() -> Fixture {
        let repo = Arc::new(InMemoryInitiativeRepository::new());
        let handler = ReprocessInitiativeHandler::new(
            repo.clone(),
            Arc::new(RecordingNotifier::new()),
            GovernanceConfig::default(),
        );
        Fixture { repo, handler }
    }

    fn analyst() -> Actor {
        Actor::new(UserId::new("analyst-1").unwrap(), Role::Analyst)
    }

    async fn seed(fix: &Fixture, amount: i64, transformation: u8) -> InitiativeId {
        let initiative = Initiative::new(
            InitiativeId::new(),
            "Observability rollout".to_string(),
            "Central telemetry".to_string(),
            "Operations".to_string(),
            Money::from_major(amount),
            Percentage::new(transformation),
            UserId::new("requester-1").unwrap(),
            &GovernanceConfig::default().investment_bands(),
        )
        .unwrap();
        let id = *initiative.id();
        fix.repo.save(&initiative).await.unwrap();
        id
    }

    #[tokio::test]
    async fn amount_change_reclassifies() {
        let fix = fixture();
        let id = seed(&fix, 100_000_000, 40).await;

        let result = fix
            .handler
            .handle(ReprocessCommand {
                initiative_id: id,
                estimated_amount: Some(Money::from_major(300_000_000)),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(result.initiative.classification(), InvestmentClass::AltaB);
        assert_eq!(result.initiative.report_type(), ReportType::V2);
    }

    #[tokio::test]
    async fn scoring_computes_total_and_priority() {
        let fix = fixture();
        let id = seed(&fix, 100_000_000, 40).await;

        let result = fix
            .handler
            .handle(ReprocessCommand {
                initiative_id: id,
                score: Some(ScoreInput {
                    focus_alignment: 4,
                    depth_of_contribution: 7,
                    benefit_type: 5,
                    organizational_reach: 3,
                    urgency: 7,
                    technical_feasibility: 7,
                }),
                actor: Some(analyst()),
                ..Default::default()
            })
            .await
            .unwrap();

        let score = result.initiative.score().unwrap();
        assert_eq!(score.total(), 33);
        assert_eq!(score.priority(), Priority::P1);
        assert_eq!(score.computed_by().unwrap().as_str(), "analyst-1");
    }

    #[tokio::test]
    async fn scoring_a_submitted_initiative_moves_it_to_review() {
        let fix = fixture();
        let id = seed(&fix, 100_000_000, 40).await;

        let mut initiative = fix.repo.find_by_id(&id).await.unwrap().unwrap();
        let record = initiative
            .transition(
                InitiativeStatus::Submitted,
                &UserId::new("requester-1").unwrap(),
                None,
            )
            .unwrap();
        fix.repo.update(&initiative).await.unwrap();
        fix.repo.append_transition(&record).await.unwrap();

        let result = fix
            .handler
            .handle(ReprocessCommand {
                initiative_id: id,
                score: Some(ScoreInput::default()),
                actor: Some(analyst()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(result.initiative.status(), InitiativeStatus::InReview);
        let trail = fix.repo.transitions_for(&id).await.unwrap();
        assert_eq!(trail.last().unwrap().next(), InitiativeStatus::InReview);
    }

    #[tokio::test]
    async fn reprocess_is_idempotent_for_unchanged_inputs() {
        let fix = fixture();
        let id = seed(&fix, 100_000_000, 40).await;

        let first = fix
            .handler
            .handle(ReprocessCommand {
                initiative_id: id,
                ..Default::default()
            })
            .await
            .unwrap();
        let second = fix
            .handler
            .handle(ReprocessCommand {
                initiative_id: id,
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(
            first.initiative.classification(),
            second.initiative.classification()
        );
        assert_eq!(first.initiative.report_type(), second.initiative.report_type());
    }

    #[tokio::test]
    async fn unknown_initiative_fails_with_not_found() {
        let fix = fixture();
        let err = fix
            .handler
            .handle(ReprocessCommand {
                initiative_id: InitiativeId::new(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, InitiativeError::NotFound(_)));
    }
}
