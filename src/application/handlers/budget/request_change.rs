//! RequestBudgetChangeHandler - Command handler opening a change request.

use std::sync::Arc;

use crate::domain::budget::{
    BudgetChangeRequest, BudgetChangeRequested, BudgetError, ChangeType,
};
use crate::domain::foundation::{Actor, ChangeRequestId, EventId, Money, ProjectId, Timestamp};
use crate::ports::{notify_event, BudgetRepository, Notifier, ProjectRepository};

/// Command to request a change to a project's approved CAPEX.
#[derive(Debug, Clone)]
pub struct RequestBudgetChangeCommand {
    pub project_id: ProjectId,
    pub change_type: ChangeType,
    pub requested_amount: Money,
    pub justification: String,
    pub actor: Actor,
}

/// Result of a successful request.
#[derive(Debug, Clone)]
pub struct RequestBudgetChangeResult {
    pub request: BudgetChangeRequest,
}

/// Handler opening budget change requests.
pub struct RequestBudgetChangeHandler {
    projects: Arc<dyn ProjectRepository>,
    budgets: Arc<dyn BudgetRepository>,
    notifier: Arc<dyn Notifier>,
}

impl RequestBudgetChangeHandler {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        budgets: Arc<dyn BudgetRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            projects,
            budgets,
            notifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: RequestBudgetChangeCommand,
    ) -> Result<RequestBudgetChangeResult, BudgetError> {
        if self.projects.find_by_id(&cmd.project_id).await?.is_none() {
            return Err(BudgetError::ProjectNotFound(cmd.project_id));
        }

        let request = BudgetChangeRequest::new(
            ChangeRequestId::new(),
            cmd.project_id,
            cmd.change_type,
            cmd.requested_amount,
            cmd.justification,
            cmd.actor.user_id().clone(),
        )?;
        self.budgets.save_change_request(&request).await?;

        let event = BudgetChangeRequested {
            event_id: EventId::new(),
            change_request_id: *request.id(),
            project_id: cmd.project_id,
            change_type: cmd.change_type,
            requested_amount: request.requested_amount(),
            requested_by: cmd.actor.user_id().clone(),
            occurred_at: Timestamp::now(),
        };
        notify_event(self.notifier.as_ref(), &event).await;

        Ok(RequestBudgetChangeResult { request })
    }
}
