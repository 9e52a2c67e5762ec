//! RejectBudgetChangeHandler - Command handler resolving a change
//! request as rejected.

use std::sync::Arc;

use crate::domain::budget::{BudgetChangeRejected, BudgetChangeRequest, BudgetError};
use crate::domain::foundation::{Actor, ChangeRequestId, ErrorCode, EventId, Timestamp};
use crate::ports::{notify_event, BudgetRepository, Notifier};

/// Command to reject a pending change request.
#[derive(Debug, Clone)]
pub struct RejectBudgetChangeCommand {
    pub change_request_id: ChangeRequestId,
    pub actor: Actor,
    pub notes: Option<String>,
}

/// Result of a successful rejection.
#[derive(Debug, Clone)]
pub struct RejectBudgetChangeResult {
    pub request: BudgetChangeRequest,
}

/// Handler rejecting change requests. The project budget is untouched.
pub struct RejectBudgetChangeHandler {
    budgets: Arc<dyn BudgetRepository>,
    notifier: Arc<dyn Notifier>,
}

impl RejectBudgetChangeHandler {
    pub fn new(budgets: Arc<dyn BudgetRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self { budgets, notifier }
    }

    pub async fn handle(
        &self,
        cmd: RejectBudgetChangeCommand,
    ) -> Result<RejectBudgetChangeResult, BudgetError> {
        let mut request = self
            .budgets
            .find_change_request(&cmd.change_request_id)
            .await?
            .ok_or(BudgetError::ChangeRequestNotFound(cmd.change_request_id))?;

        request
            .reject(cmd.actor.user_id().clone(), cmd.notes)
            .map_err(|e| match e.code {
                ErrorCode::AlreadyResolved => {
                    BudgetError::AlreadyResolved(cmd.change_request_id)
                }
                _ => e.into(),
            })?;
        self.budgets.update_change_request(&request).await?;

        let event = BudgetChangeRejected {
            event_id: EventId::new(),
            change_request_id: *request.id(),
            project_id: *request.project_id(),
            resolved_by: cmd.actor.user_id().clone(),
            occurred_at: Timestamp::now(),
        };
        notify_event(self.notifier.as_ref(), &event).await;

        Ok(RejectBudgetChangeResult { request })
    }
}
