//! GetOverrunAlertsHandler - Query handler for the overrun rules.

use std::sync::Arc;

use crate::config::GovernanceConfig;
use crate::domain::budget::{check_overrun, BudgetError, OverrunAlert};
use crate::domain::foundation::ProjectId;
use crate::ports::{BudgetRepository, ProjectRepository};

/// Query evaluating the overrun rules for a project.
#[derive(Debug, Clone)]
pub struct GetOverrunAlertsQuery {
    pub project_id: ProjectId,
    /// Tolerated gap in percentage points; the configured default is
    /// used when absent.
    pub alert_threshold: Option<f64>,
}

/// Alerts plus the figures they were computed from.
#[derive(Debug, Clone)]
pub struct OverrunAlertsResult {
    pub alerts: Vec<OverrunAlert>,
    pub executed_pct: f64,
    pub progress_pct: f64,
}

/// Handler evaluating the overrun rules on demand.
///
/// A project without a budget (or with zero approved CAPEX) reports no
/// alerts: there is nothing to overrun yet.
pub struct GetOverrunAlertsHandler {
    projects: Arc<dyn ProjectRepository>,
    budgets: Arc<dyn BudgetRepository>,
    config: GovernanceConfig,
}

impl GetOverrunAlertsHandler {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        budgets: Arc<dyn BudgetRepository>,
        config: GovernanceConfig,
    ) -> Self {
        Self {
            projects,
            budgets,
            config,
        }
    }

    pub async fn handle(
        &self,
        query: GetOverrunAlertsQuery,
    ) -> Result<OverrunAlertsResult, BudgetError> {
        let project = self
            .projects
            .find_by_id(&query.project_id)
            .await?
            .ok_or(BudgetError::ProjectNotFound(query.project_id))?;

        let Some(budget) = self.budgets.find_budget(&query.project_id).await? else {
            return Ok(OverrunAlertsResult {
                alerts: Vec::new(),
                executed_pct: 0.0,
                progress_pct: project.percent_complete().as_f64(),
            });
        };

        let threshold = query
            .alert_threshold
            .unwrap_or(self.config.overrun_alert_gap);
        let alerts = check_overrun(&budget, project.percent_complete(), threshold);

        Ok(OverrunAlertsResult {
            alerts,
            executed_pct: budget.executed_capex().pct_of(budget.approved_capex()),
            progress_pct: project.percent_complete().as_f64(),
        })
    }
}
