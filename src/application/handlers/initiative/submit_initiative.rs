//! SubmitInitiativeHandler - Command handler for proposing initiatives.

use std::sync::Arc;

use crate::config::GovernanceConfig;
use crate::domain::foundation::{Actor, EventId, InitiativeId, Money, Percentage, Timestamp};
use crate::domain::initiative::{Initiative, InitiativeError, InitiativeSubmitted};
use crate::ports::{notify_event, InitiativeRepository, Notifier};

/// Command to create a new draft initiative.
#[derive(Debug, Clone)]
pub struct SubmitInitiativeCommand {
    pub title: String,
    pub description: String,
    pub requesting_area: String,
    pub estimated_amount: Money,
    pub transformation: Percentage,
    pub actor: Actor,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitInitiativeResult {
    pub initiative: Initiative,
}

/// Handler for proposing initiatives.
///
/// Creates the draft with classification and report type already derived,
/// and writes the creation entry of the audit trail in the same unit of
/// work.
pub struct SubmitInitiativeHandler {
    repository: Arc<dyn InitiativeRepository>,
    notifier: Arc<dyn Notifier>,
    config: GovernanceConfig,
}

impl SubmitInitiativeHandler {
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

    pub async fn handle(
        &self,
        cmd: SubmitInitiativeCommand,
    ) -> Result<SubmitInitiativeResult, InitiativeError> {
        let initiative = Initiative::new(
            InitiativeId::new(),
            cmd.title,
            cmd.description,
            cmd.requesting_area,
            cmd.estimated_amount,
            cmd.transformation,
            cmd.actor.user_id().clone(),
            &self.config.investment_bands(),
        )?;

        self.repository.save(&initiative).await?;
        self.repository
            .append_transition(&initiative.creation_record())
            .await?;

        let event = InitiativeSubmitted {
            event_id: EventId::new(),
            initiative_id: *initiative.id(),
            code: initiative.code().to_string(),
            title: initiative.title().to_string(),
            requesting_area: initiative.requesting_area().to_string(),
            estimated_amount: initiative.estimated_amount(),
            classification: initiative.classification(),
            report_type: initiative.report_type(),
            created_by: initiative.created_by().clone(),
            occurred_at: Timestamp::now(),
        };
        notify_event(self.notifier.as_ref(), &event).await;

        Ok(SubmitInitiativeResult { initiative })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryInitiativeRepository;
    use crate::adapters::notifications::RecordingNotifier;
    use crate::domain::foundation::{Role, UserId};
    use crate::domain::initiative::{InitiativeStatus, InvestmentClass, ReportType};

    fn handler(
        repo: Arc<InMemoryInitiativeRepository>,
        notifier: Arc<RecordingNotifier>,
    ) -> SubmitInitiativeHandler {
        SubmitInitiativeHandler::new(repo, notifier, GovernanceConfig::default())
    }

    fn command(amount: i64, transformation: u8) -> SubmitInitiativeCommand {
        SubmitInitiativeCommand {
            title: "CRM replacement".to_string(),
            description: "Replace the legacy CRM platform".to_string(),
            requesting_area: "Commercial".to_string(),
            estimated_amount: Money::from_major(amount),
            transformation: Percentage::new(transformation),
            actor: Actor::new(UserId::new("requester-1").unwrap(), Role::Requester),
        }
    }

    #[tokio::test]
    async fn submission_persists_draft_with_audit_record() {
        let repo = Arc::new(InMemoryInitiativeRepository::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let result = handler(repo.clone(), notifier.clone())
            .handle(command(100_000_000, 40))
            .await
            .unwrap();

        let initiative = result.initiative;
        assert_eq!(initiative.status(), InitiativeStatus::Draft);
        assert_eq!(initiative.classification(), InvestmentClass::EstandarA);
        assert_eq!(initiative.report_type(), ReportType::V1);

        let stored = repo.find_by_id(initiative.id()).await.unwrap().unwrap();
        assert_eq!(stored, initiative);

        let trail = repo.transitions_for(initiative.id()).await.unwrap();
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].previous(), None);
        assert_eq!(trail[0].next(), InitiativeStatus::Draft);

        assert!(notifier.has_event("initiative.submitted"));
    }

    #[tokio::test]
    async fn strategic_amounts_classify_on_submission() {
        let repo = Arc::new(InMemoryInitiativeRepository::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let result = handler(repo, notifier)
            .handle(command(2_000_000_000, 10))
            .await
            .unwrap();

        assert_eq!(
            result.initiative.classification(),
            InvestmentClass::Estrategica
        );
        assert_eq!(result.initiative.report_type(), ReportType::V3);
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_before_persistence() {
        let repo = Arc::new(InMemoryInitiativeRepository::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let mut cmd = command(100, 40);
        cmd.title = String::new();

        let err = handler(repo, notifier.clone()).handle(cmd).await.unwrap_err();
        assert!(matches!(err, InitiativeError::ValidationFailed { .. }));
        assert_eq!(notifier.count(), 0);
    }

    #[tokio::test]
    async fn notifier_failure_does_not_fail_submission() {
        let repo = Arc::new(InMemoryInitiativeRepository::new());
        let notifier = Arc::new(RecordingNotifier::failing());
        let result = handler(repo, notifier).handle(command(100, 0)).await;
        assert!(result.is_ok());
    }
}
