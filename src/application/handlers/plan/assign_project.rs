//! AssignProjectToPlanHandler - Command handler scheduling a reserve-bank
//! project into an annual plan.

use std::sync::Arc;

use crate::domain::foundation::{Actor, EventId, Money, ProjectId, Timestamp};
use crate::domain::plan::{AnnualPlan, PlanError};
use crate::domain::project::{Project, ProjectStateChanged, ProjectStatus};
use crate::ports::{notify_event, Notifier, PlanRepository, ProjectRepository};

/// Command to put a project into the plan of a year.
#[derive(Debug, Clone)]
pub struct AssignProjectToPlanCommand {
    pub year: i32,
    pub project_id: ProjectId,
    pub amount: Money,
    pub priority_order: Option<u32>,
    pub notes: Option<String>,
    pub actor: Actor,
}

/// Result of a successful assignment.
#[derive(Debug, Clone)]
pub struct AssignProjectToPlanResult {
    pub plan: AnnualPlan,
    pub project: Project,
}

/// Handler committing plan budget to a project and moving the project
/// into the annual-plan state.
pub struct AssignProjectToPlanHandler {
    plans: Arc<dyn PlanRepository>,
    projects: Arc<dyn ProjectRepository>,
    notifier: Arc<dyn Notifier>,
}

impl AssignProjectToPlanHandler {
    pub fn new(
        plans: Arc<dyn PlanRepository>,
        projects: Arc<dyn ProjectRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            plans,
            projects,
            notifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: AssignProjectToPlanCommand,
    ) -> Result<AssignProjectToPlanResult, PlanError> {
        let mut plan = self
            .plans
            .find_by_year(cmd.year)
            .await?
            .ok_or(PlanError::NotFound(cmd.year))?;

        let mut project = self
            .projects
            .find_by_id(&cmd.project_id)
            .await?
            .ok_or_else(|| {
                PlanError::ValidationFailed {
                    field: "project_id".to_string(),
                    message: format!("Project not found: {}", cmd.project_id),
                }
            })?;

        // Project-side transition first: only reserve-bank projects can
        // be scheduled, and the edge check carries that rule.
        project
            .assign_to_plan(cmd.year, cmd.amount)
            .map_err(|e| PlanError::InvalidState(e.message))?;

        plan.assign_project(cmd.project_id, cmd.amount, cmd.priority_order, cmd.notes)?;

        self.plans.update(&plan).await?;
        self.projects
            .update(&project)
            .await
            .map_err(PlanError::from)?;

        let event = ProjectStateChanged {
            event_id: EventId::new(),
            project_id: cmd.project_id,
            previous: ProjectStatus::ReserveBank,
            next: ProjectStatus::AnnualPlan,
            actor: cmd.actor.user_id().clone(),
            occurred_at: Timestamp::now(),
        };
        notify_event(self.notifier.as_ref(), &event).await;

        Ok(AssignProjectToPlanResult { plan, project })
    }
}
