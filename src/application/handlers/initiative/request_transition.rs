//! RequestTransitionHandler - Command handler for lifecycle transitions.

use std::sync::Arc;

use crate::domain::foundation::{Actor, EventId, InitiativeId, Timestamp};
use crate::domain::initiative::{
    Initiative, InitiativeError, InitiativeStateChanged, InitiativeStatus, StateTransitionRecord,
};
use crate::domain::project::{Project, ProjectCreated};
use crate::ports::{notify_event, InitiativeRepository, Notifier, ProjectRepository};

/// Command to move an initiative to a target state.
#[derive(Debug, Clone)]
pub struct RequestTransitionCommand {
    pub initiative_id: InitiativeId,
    pub target: InitiativeStatus,
    pub actor: Actor,
    pub comment: Option<String>,
    /// Bypass the adjacency table. Only administrators can do this, and
    /// they must ask for it explicitly.
    pub force: bool,
}

/// Result of a successful transition.
#[derive(Debug, Clone)]
pub struct RequestTransitionResult {
    pub initiative: Initiative,
    pub record: StateTransitionRecord,
    /// Set when the transition to `approved` spawned the project.
    pub spawned_project: Option<Project>,
}

/// Handler for initiative state transitions.
///
/// Validates the edge against the adjacency table (or applies the forced
/// override), appends the audit record, and spawns the project when the
/// target is `approved`. The optimistic version check on the initiative
/// makes racing transitions lose cleanly instead of double-applying.
pub struct RequestTransitionHandler {
    initiatives: Arc<dyn InitiativeRepository>,
    projects: Arc<dyn ProjectRepository>,
    notifier: Arc<dyn Notifier>,
}

impl RequestTransitionHandler {
    pub fn new(
        initiatives: Arc<dyn InitiativeRepository>,
        projects: Arc<dyn ProjectRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            initiatives,
            projects,
            notifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: RequestTransitionCommand,
    ) -> Result<RequestTransitionResult, InitiativeError> {
        let mut initiative = self
            .initiatives
            .find_by_id(&cmd.initiative_id)
            .await?
            .ok_or(InitiativeError::NotFound(cmd.initiative_id))?;

        let record = if cmd.force {
            let capability = cmd.actor.force_transition()?;
            initiative.force_transition(
                cmd.target,
                cmd.actor.user_id(),
                cmd.comment.clone(),
                &capability,
            )
        } else {
            initiative.transition(cmd.target, cmd.actor.user_id(), cmd.comment.clone())?
        };

        self.initiatives.update(&initiative).await?;
        self.initiatives.append_transition(&record).await?;

        let spawned_project = if cmd.target == InitiativeStatus::Approved {
            self.spawn_project(&initiative).await?
        } else {
            None
        };

        let event = InitiativeStateChanged {
            event_id: EventId::new(),
            initiative_id: *initiative.id(),
            previous: record.previous(),
            next: record.next(),
            actor: cmd.actor.user_id().clone(),
            comment: cmd.comment,
            forced: cmd.force,
            occurred_at: Timestamp::now(),
        };
        notify_event(self.notifier.as_ref(), &event).await;

        Ok(RequestTransitionResult {
            initiative,
            record,
            spawned_project,
        })
    }

    async fn spawn_project(
        &self,
        initiative: &Initiative,
    ) -> Result<Option<Project>, InitiativeError> {
        // One project per initiative; a forced re-approval must not
        // spawn a second one.
        if self
            .projects
            .find_by_initiative(initiative.id())
            .await?
            .is_some()
        {
            return Ok(None);
        }

        let project = Project::spawn_from(initiative);
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

        Ok(Some(project))
    }
}
