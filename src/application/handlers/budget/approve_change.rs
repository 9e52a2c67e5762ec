//! ApproveBudgetChangeHandler - Command handler resolving a change
//! request as approved and applying it to the project budget.

use std::sync::Arc;

use crate::domain::budget::{
    BudgetChangeApproved, BudgetChangeRequest, BudgetError, ChangeType,
};
use crate::domain::foundation::{Actor, ChangeRequestId, ErrorCode, EventId, Money, Timestamp};
use crate::ports::{notify_event, BudgetRepository, Notifier};

/// Command to approve a pending change request.
#[derive(Debug, Clone)]
pub struct ApproveBudgetChangeCommand {
    pub change_request_id: ChangeRequestId,
    /// Amount actually granted; may differ from the requested amount.
    pub approved_amount: Money,
    pub actor: Actor,
    pub notes: Option<String>,
}

/// Result of a successful approval.
#[derive(Debug, Clone)]
pub struct ApproveBudgetChangeResult {
    pub request: BudgetChangeRequest,
    /// Approved CAPEX after applying the change (unchanged for a
    /// reallocation).
    pub new_approved_capex: Money,
}

/// Handler approving change requests.
///
/// Resolution and the CAPEX adjustment happen in the same unit of work:
/// an increase adds the approved amount, a decrease subtracts it, a
/// reallocation records the resolution without touching the total.
pub struct ApproveBudgetChangeHandler {
    budgets: Arc<dyn BudgetRepository>,
    notifier: Arc<dyn Notifier>,
}

impl ApproveBudgetChangeHandler {
    pub fn new(budgets: Arc<dyn BudgetRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self { budgets, notifier }
    }

    pub async fn handle(
        &self,
        cmd: ApproveBudgetChangeCommand,
    ) -> Result<ApproveBudgetChangeResult, BudgetError> {
        let mut request = self
            .budgets
            .find_change_request(&cmd.change_request_id)
            .await?
            .ok_or(BudgetError::ChangeRequestNotFound(cmd.change_request_id))?;

        request
            .approve(cmd.approved_amount, cmd.actor.user_id().clone(), cmd.notes)
            .map_err(|e| match e.code {
                ErrorCode::AlreadyResolved => {
                    BudgetError::AlreadyResolved(cmd.change_request_id)
                }
                _ => e.into(),
            })?;
        self.budgets.update_change_request(&request).await?;

        let mut budget = self
            .budgets
            .find_budget(request.project_id())
            .await?
            .ok_or(BudgetError::BudgetNotFound(*request.project_id()))?;
        budget.apply_change(request.change_type(), cmd.approved_amount);
        self.budgets.update_budget(&budget).await?;

        let event = BudgetChangeApproved {
            event_id: EventId::new(),
            change_request_id: *request.id(),
            project_id: *request.project_id(),
            change_type: request.change_type(),
            approved_amount: cmd.approved_amount,
            new_approved_capex: budget.approved_capex(),
            resolved_by: cmd.actor.user_id().clone(),
            occurred_at: Timestamp::now(),
        };
        notify_event(self.notifier.as_ref(), &event).await;

        Ok(ApproveBudgetChangeResult {
            request,
            new_approved_capex: budget.approved_capex(),
        })
    }
}
