//! RecordExecutionHandler - Command handler upserting monthly execution
//! and recomputing the cumulative executed total.

use std::sync::Arc;

use crate::config::GovernanceConfig;
use crate::domain::budget::{
    check_overrun, BudgetAlertRaised, BudgetError, ExecutionRecorded, MonthlyExecutionRecord,
    OverrunAlert,
};
use crate::domain::foundation::{
    EventId, Money, Percentage, Period, ProjectId, Timestamp,
};
use crate::domain::project::ProjectStatus;
use crate::ports::{notify_event, BudgetRepository, Notifier, ProjectRepository};

/// Command to record (or correct) one month of execution.
#[derive(Debug, Clone)]
pub struct RecordExecutionCommand {
    pub project_id: ProjectId,
    pub year: i32,
    pub month: u8,
    pub planned_capex: Money,
    pub executed_capex: Money,
    pub planned_progress: Percentage,
    pub actual_progress: Percentage,
    pub comment: Option<String>,
}

/// Result of a successful recording.
#[derive(Debug, Clone)]
pub struct RecordExecutionResult {
    pub record: MonthlyExecutionRecord,
    /// Cumulative executed CAPEX over all periods after this write.
    pub cumulative_executed: Money,
    /// Overrun alerts raised by this recording, if any.
    pub alerts: Vec<OverrunAlert>,
}

/// Handler recording monthly execution.
///
/// Writes are upserts on the (project, period) key: a correction for an
/// existing month replaces it. The budget's executed total is then
/// recomputed as the sum over all periods, so edits can never drift the
/// cumulative figure. After the write, the overrun
/// rules run and any alerts are dispatched.
pub struct RecordExecutionHandler {
    projects: Arc<dyn ProjectRepository>,
    budgets: Arc<dyn BudgetRepository>,
    notifier: Arc<dyn Notifier>,
    config: GovernanceConfig,
}

impl RecordExecutionHandler {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        budgets: Arc<dyn BudgetRepository>,
        notifier: Arc<dyn Notifier>,
        config: GovernanceConfig,
    ) -> Self {
        Self {
            projects,
            budgets,
            notifier,
            config,
        }
    }

    pub async fn handle(
        &self,
        cmd: RecordExecutionCommand,
    ) -> Result<RecordExecutionResult, BudgetError> {
        let project = self
            .projects
            .find_by_id(&cmd.project_id)
            .await?
            .ok_or(BudgetError::ProjectNotFound(cmd.project_id))?;

        if project.status() != ProjectStatus::InExecution {
            return Err(BudgetError::NotExecutable(project.status().to_string()));
        }

        let period = Period::new(cmd.year, cmd.month).map_err(|e| {
            BudgetError::ValidationFailed {
                field: "period".to_string(),
                message: e.to_string(),
            }
        })?;
        let planned = Money::try_non_negative(cmd.planned_capex.cents()).map_err(|e| {
            BudgetError::ValidationFailed {
                field: "planned_capex".to_string(),
                message: e.to_string(),
            }
        })?;
        let executed = Money::try_non_negative(cmd.executed_capex.cents()).map_err(|e| {
            BudgetError::ValidationFailed {
                field: "executed_capex".to_string(),
                message: e.to_string(),
            }
        })?;

        let record = MonthlyExecutionRecord::new(
            cmd.project_id,
            period,
            planned,
            executed,
            cmd.planned_progress,
            cmd.actual_progress,
            cmd.comment,
        );
        self.budgets.upsert_execution(&record).await?;

        let cumulative_executed: Money = self
            .budgets
            .executions_for(&cmd.project_id)
            .await?
            .iter()
            .map(MonthlyExecutionRecord::executed_capex)
            .sum();

        let mut alerts = Vec::new();
        if let Some(mut budget) = self.budgets.find_budget(&cmd.project_id).await? {
            budget.set_executed_total(cumulative_executed);
            self.budgets.update_budget(&budget).await?;

            alerts = check_overrun(
                &budget,
                project.percent_complete(),
                self.config.overrun_alert_gap,
            );
            for alert in &alerts {
                let event = BudgetAlertRaised {
                    event_id: EventId::new(),
                    project_id: cmd.project_id,
                    kind: alert.kind,
                    severity: alert.severity,
                    message: alert.message.clone(),
                    occurred_at: Timestamp::now(),
                };
                notify_event(self.notifier.as_ref(), &event).await;
            }
        }

        let event = ExecutionRecorded {
            event_id: EventId::new(),
            project_id: cmd.project_id,
            period,
            executed_capex: executed,
            cumulative_executed,
            occurred_at: Timestamp::now(),
        };
        notify_event(self.notifier.as_ref(), &event).await;

        Ok(RecordExecutionResult {
            record,
            cumulative_executed,
            alerts,
        })
    }
}
