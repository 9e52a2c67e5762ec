//! RemoveProjectFromPlanHandler - Command handler returning a scheduled
//! project to the reserve bank.

use std::sync::Arc;

use crate::domain::foundation::{Actor, EventId, Money, ProjectId, Timestamp};
use crate::domain::plan::{AnnualPlan, PlanError};
use crate::domain::project::{Project, ProjectStateChanged, ProjectStatus};
use crate::ports::{notify_event, Notifier, PlanRepository, ProjectRepository};

/// Command to take a project out of an annual plan.
#[derive(Debug, Clone)]
pub struct RemoveProjectFromPlanCommand {
    pub year: i32,
    pub project_id: ProjectId,
    pub actor: Actor,
}

/// Result of a successful removal.
#[derive(Debug, Clone)]
pub struct RemoveProjectFromPlanResult {
    pub plan: AnnualPlan,
    pub project: Project,
    /// Committed amount released back to the envelope.
    pub released: Money,
}

/// Handler releasing a project's committed amount and returning the
/// project to the reserve bank.
pub struct RemoveProjectFromPlanHandler {
    plans: Arc<dyn PlanRepository>,
    projects: Arc<dyn ProjectRepository>,
    notifier: Arc<dyn Notifier>,
}

impl RemoveProjectFromPlanHandler {
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
        cmd: RemoveProjectFromPlanCommand,
    ) -> Result<RemoveProjectFromPlanResult, PlanError> {
        let mut plan = self
            .plans
            .find_by_year(cmd.year)
            .await?
            .ok_or(PlanError::NotFound(cmd.year))?;

        let mut project = self
            .projects
            .find_by_id(&cmd.project_id)
            .await?
            .ok_or_else(|| PlanError::ValidationFailed {
                field: "project_id".to_string(),
                message: format!("Project not found: {}", cmd.project_id),
            })?;

        let released = plan.remove_project(&cmd.project_id)?;
        project
            .remove_from_plan()
            .map_err(|e| PlanError::InvalidState(e.message))?;

        self.plans.update(&plan).await?;
        self.projects
            .update(&project)
            .await
            .map_err(PlanError::from)?;

        let event = ProjectStateChanged {
            event_id: EventId::new(),
            project_id: cmd.project_id,
            previous: ProjectStatus::AnnualPlan,
            next: ProjectStatus::ReserveBank,
            actor: cmd.actor.user_id().clone(),
            occurred_at: Timestamp::now(),
        };
        notify_event(self.notifier.as_ref(), &event).await;

        Ok(RemoveProjectFromPlanResult {
            plan,
            project,
            released,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::plan::assign_project::{
        AssignProjectToPlanCommand, AssignProjectToPlanHandler,
    };
    use crate::application::handlers::plan::test_support::{
        board, fixture, seed_plan, seed_project, Fixture,
    };

    fn handler(fix: &Fixture) -> RemoveProjectFromPlanHandler {
        RemoveProjectFromPlanHandler::new(
            fix.plans.clone(),
            fix.projects.clone(),
            fix.notifier.clone(),
        )
    }

    async fn assign(fix: &Fixture, project_id: ProjectId, amount: i64) {
        AssignProjectToPlanHandler::new(fix.plans.clone(), fix.projects.clone(), fix.notifier.clone())
            .handle(AssignProjectToPlanCommand {
                year: 2026,
                project_id,
                amount: Money::from_major(amount),
                priority_order: None,
                notes: None,
                actor: board(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn removal_releases_budget_and_returns_project_to_bank() {
        let fix = fixture();
        seed_plan(&fix, 2026, 1_000).await;
        let project_id = seed_project(&fix, 600).await;
        assign(&fix, project_id, 400).await;

        let result = handler(&fix)
            .handle(RemoveProjectFromPlanCommand {
                year: 2026,
                project_id,
                actor: board(),
            })
            .await
            .unwrap();

        assert_eq!(result.released, Money::from_major(400));
        assert_eq!(result.plan.committed_budget(), Money::ZERO);
        assert_eq!(result.project.status(), ProjectStatus::ReserveBank);
        assert_eq!(result.project.plan_year(), None);
    }

    #[tokio::test]
    async fn removing_an_unscheduled_project_fails() {
        let fix = fixture();
        seed_plan(&fix, 2026, 1_000).await;
        let project_id = seed_project(&fix, 100).await;

        let err = handler(&fix)
            .handle(RemoveProjectFromPlanCommand {
                year: 2026,
                project_id,
                actor: board(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PlanError::ValidationFailed { .. }));
    }
}
