//! CloseProjectHandler - Command handler completing a project.

use std::sync::Arc;

use crate::domain::foundation::{Actor, EventId, ProjectId, Timestamp};
use crate::domain::project::{Project, ProjectClosed, ProjectError};
use crate::ports::{notify_event, Notifier, ProjectRepository};

/// Command to complete and close an executing project.
#[derive(Debug, Clone)]
pub struct CloseProjectCommand {
    pub project_id: ProjectId,
    pub actor: Actor,
    pub lessons_learned: Option<String>,
    pub success_metrics: Option<String>,
}

/// Result of a successful close.
#[derive(Debug, Clone)]
pub struct CloseProjectResult {
    pub project: Project,
}

/// Handler closing completed projects.
pub struct CloseProjectHandler {
    projects: Arc<dyn ProjectRepository>,
    notifier: Arc<dyn Notifier>,
}

impl CloseProjectHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self { projects, notifier }
    }

    pub async fn handle(&self, cmd: CloseProjectCommand) -> Result<CloseProjectResult, ProjectError> {
        let mut project = self
            .projects
            .find_by_id(&cmd.project_id)
            .await?
            .ok_or(ProjectError::NotFound(cmd.project_id))?;

        project.complete(cmd.lessons_learned, cmd.success_metrics)?;
        self.projects.update(&project).await?;

        let event = ProjectClosed {
            event_id: EventId::new(),
            project_id: *project.id(),
            actor: cmd.actor.user_id().clone(),
            occurred_at: Timestamp::now(),
        };
        notify_event(self.notifier.as_ref(), &event).await;

        Ok(CloseProjectResult { project })
    }
}
