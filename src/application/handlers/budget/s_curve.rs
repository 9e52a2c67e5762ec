//! GetSCurveHandler - Query handler building the execution S-curve.

use std::sync::Arc;

use crate::domain::budget::{compute_s_curve, BudgetError, SCurve};
use crate::domain::foundation::{Money, ProjectId};
use crate::ports::{BudgetRepository, ProjectRepository};

/// Query for a project's S-curve.
#[derive(Debug, Clone)]
pub struct GetSCurveQuery {
    pub project_id: ProjectId,
}

/// Handler computing the cumulative planned-vs-executed series.
pub struct GetSCurveHandler {
    projects: Arc<dyn ProjectRepository>,
    budgets: Arc<dyn BudgetRepository>,
}

impl GetSCurveHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>, budgets: Arc<dyn BudgetRepository>) -> Self {
        Self { projects, budgets }
    }

    pub async fn handle(&self, query: GetSCurveQuery) -> Result<SCurve, BudgetError> {
        if self.projects.find_by_id(&query.project_id).await?.is_none() {
            return Err(BudgetError::ProjectNotFound(query.project_id));
        }

        let records = self.budgets.executions_for(&query.project_id).await?;
        let approved_capex = self
            .budgets
            .find_budget(&query.project_id)
            .await?
            .map(|b| b.approved_capex())
            .unwrap_or(Money::ZERO);

        Ok(compute_s_curve(&records, approved_capex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::budget::record_execution::{
        RecordExecutionCommand, RecordExecutionHandler,
    };
    use crate::application::handlers::budget::test_support::{
        fixture, seed_executing_project, Fixture,
    };
    use crate::config::GovernanceConfig;
    use crate::domain::foundation::Percentage;

    fn handler(fix: &Fixture) -> GetSCurveHandler {
        GetSCurveHandler::new(fix.projects.clone(), fix.budgets.clone())
    }

    async fn record(fix: &Fixture, project_id: ProjectId, month: u8, planned: i64, executed: i64) {
        RecordExecutionHandler::new(
            fix.projects.clone(),
            fix.budgets.clone(),
            fix.notifier.clone(),
            GovernanceConfig::default(),
        )
        .handle(RecordExecutionCommand {
            project_id,
            year: 2025,
            month,
            planned_capex: Money::from_major(planned),
            executed_capex: Money::from_major(executed),
            planned_progress: Percentage::new(month * 10),
            actual_progress: Percentage::new(month * 10),
            comment: None,
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn s_curve_orders_and_accumulates_periods() {
        let fix = fixture();
        let project_id = seed_executing_project(&fix, 1_000).await;

        // Recorded out of order; the curve sorts by period.
        record(&fix, project_id, 3, 100, 130).await;
        record(&fix, project_id, 1, 100, 80).await;
        record(&fix, project_id, 2, 100, 100).await;

        let curve = handler(&fix)
            .handle(GetSCurveQuery { project_id })
            .await
            .unwrap();

        let months: Vec<u8> = curve.points.iter().map(|p| p.period.month()).collect();
        assert_eq!(months, vec![1, 2, 3]);
        assert_eq!(curve.points[2].executed_cumulative, Money::from_major(310));
        assert_eq!(curve.total_planned, Money::from_major(300));
        assert_eq!(curve.total_executed, Money::from_major(310));
        assert_eq!(curve.approved_capex, Money::from_major(1_000));
        // (310 - 300) / 300 * 100 = 3.33
        assert!((curve.cost_variance_pct - 3.33).abs() < 1e-9);
        assert_eq!(curve.forecast_at_completion, Money::from_major(310));
    }

    #[tokio::test]
    async fn project_without_records_yields_empty_curve() {
        let fix = fixture();
        let project_id = seed_executing_project(&fix, 1_000).await;

        let curve = handler(&fix)
            .handle(GetSCurveQuery { project_id })
            .await
            .unwrap();
        assert!(curve.points.is_empty());
        assert_eq!(curve.cost_variance_pct, 0.0);
    }

    #[tokio::test]
    async fn unknown_project_fails_with_not_found() {
        let fix = fixture();
        let err = handler(&fix)
            .handle(GetSCurveQuery {
                project_id: ProjectId::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BudgetError::ProjectNotFound(_)));
    }
}
