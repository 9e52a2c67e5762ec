//! UpdateProjectHealthHandler - Command handler for the health signal.

use std::sync::Arc;

use crate::domain::foundation::{Actor, EventId, ProjectId, Timestamp};
use crate::domain::project::{HealthSignal, Project, ProjectError, ProjectHealthChanged};
use crate::ports::{notify_event, Notifier, ProjectRepository};

/// Command to set a project's health traffic light.
#[derive(Debug, Clone)]
pub struct UpdateProjectHealthCommand {
    pub project_id: ProjectId,
    pub health: HealthSignal,
    pub actor: Actor,
}

/// Result of a health update.
#[derive(Debug, Clone)]
pub struct UpdateProjectHealthResult {
    pub project: Project,
    /// False when the signal was already at the requested value.
    pub changed: bool,
}

/// Handler updating the health signal, journaling every actual change.
pub struct UpdateProjectHealthHandler {
    projects: Arc<dyn ProjectRepository>,
    notifier: Arc<dyn Notifier>,
}

impl UpdateProjectHealthHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self { projects, notifier }
    }

    pub async fn handle(
        &self,
        cmd: UpdateProjectHealthCommand,
    ) -> Result<UpdateProjectHealthResult, ProjectError> {
        let mut project = self
            .projects
            .find_by_id(&cmd.project_id)
            .await?
            .ok_or(ProjectError::NotFound(cmd.project_id))?;

        let previous = project.health();
        if previous == cmd.health {
            return Ok(UpdateProjectHealthResult {
                project,
                changed: false,
            });
        }

        project.set_health(cmd.health, cmd.actor.user_id());
        self.projects.update(&project).await?;

        let event = ProjectHealthChanged {
            event_id: EventId::new(),
            project_id: *project.id(),
            previous,
            next: cmd.health,
            actor: cmd.actor.user_id().clone(),
            occurred_at: Timestamp::now(),
        };
        notify_event(self.notifier.as_ref(), &event).await;

        Ok(UpdateProjectHealthResult {
            project,
            changed: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProjectRepository;
    use crate::adapters::notifications::RecordingNotifier;
    use crate::config::GovernanceConfig;
    use crate::domain::foundation::{InitiativeId, Money, Percentage, Role, UserId};
    use crate::domain::initiative::Initiative;
    use crate::domain::project::JournalKind;

    fn pm() -> Actor {
        Actor::new(UserId::new("pm-1").unwrap(), Role::Analyst)
    }

    async fn seed(repo: &InMemoryProjectRepository) -> ProjectId {
        let initiative = Initiative::new(
            InitiativeId::new(),
            "Self-service portal".to_string(),
            "Customer portal".to_string(),
            "Digital".to_string(),
            Money::from_major(900),
            Percentage::new(70),
            UserId::new("requester-1").unwrap(),
            &GovernanceConfig::default().investment_bands(),
        )
        .unwrap();
        let project = Project::spawn_from(&initiative);
        let id = *project.id();
        repo.save_new(&project).await.unwrap();
        id
    }

    #[tokio::test]
    async fn health_change_is_journaled_and_notified() {
        let repo = Arc::new(InMemoryProjectRepository::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let handler = UpdateProjectHealthHandler::new(repo.clone(), notifier.clone());
        let project_id = seed(&repo).await;

        let result = handler
            .handle(UpdateProjectHealthCommand {
                project_id,
                health: HealthSignal::Red,
                actor: pm(),
            })
            .await
            .unwrap();

        assert!(result.changed);
        assert_eq!(result.project.health(), HealthSignal::Red);
        assert_eq!(result.project.journal().len(), 1);
        assert_eq!(result.project.journal()[0].kind, JournalKind::HealthChange);
        assert!(notifier.has_event("project.health_changed"));
    }

    #[tokio::test]
    async fn unchanged_health_is_a_quiet_no_op() {
        let repo = Arc::new(InMemoryProjectRepository::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let handler = UpdateProjectHealthHandler::new(repo.clone(), notifier.clone());
        let project_id = seed(&repo).await;

        let result = handler
            .handle(UpdateProjectHealthCommand {
                project_id,
                health: HealthSignal::Green,
                actor: pm(),
            })
            .await
            .unwrap();

        assert!(!result.changed);
        assert!(result.project.journal().is_empty());
        assert_eq!(notifier.count(), 0);
    }
}
