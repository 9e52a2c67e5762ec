//! ClassifyExpensesHandler - Command handler for NIIF expense batches.

use std::sync::Arc;

use crate::config::GovernanceConfig;
use crate::domain::budget::{
    classify_expense, BudgetError, ClassificationSummary, ExpenseClassification,
    ExpensesClassified,
};
use crate::domain::foundation::{EventId, Money, ProjectId, Timestamp};
use crate::ports::{notify_event, BudgetRepository, Notifier, ProjectRepository};

/// One expense line to classify.
#[derive(Debug, Clone)]
pub struct ExpenseLine {
    pub expense_type: String,
    pub description: Option<String>,
    pub amount: Money,
    pub duration_months: u32,
}

/// Command to classify a batch of expense lines for a project.
#[derive(Debug, Clone)]
pub struct ClassifyExpensesCommand {
    pub project_id: ProjectId,
    pub lines: Vec<ExpenseLine>,
}

/// Result of a classification batch.
#[derive(Debug, Clone)]
pub struct ClassifyExpensesResult {
    pub classifications: Vec<ExpenseClassification>,
    pub summary: ClassificationSummary,
}

/// Handler classifying expense lines and appending them to the ledger.
///
/// Entries are append-only: corrections are new entries.
pub struct ClassifyExpensesHandler {
    projects: Arc<dyn ProjectRepository>,
    budgets: Arc<dyn BudgetRepository>,
    notifier: Arc<dyn Notifier>,
    config: GovernanceConfig,
}

impl ClassifyExpensesHandler {
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
        cmd: ClassifyExpensesCommand,
    ) -> Result<ClassifyExpensesResult, BudgetError> {
        if self.projects.find_by_id(&cmd.project_id).await?.is_none() {
            return Err(BudgetError::ProjectNotFound(cmd.project_id));
        }

        let thresholds = self.config.niif_thresholds();
        let mut classifications = Vec::with_capacity(cmd.lines.len());
        for line in &cmd.lines {
            let amount =
                Money::try_non_negative(line.amount.cents()).map_err(|e| {
                    BudgetError::ValidationFailed {
                        field: "amount".to_string(),
                        message: e.to_string(),
                    }
                })?;
            let tag =
                classify_expense(&line.expense_type, amount, line.duration_months, &thresholds);
            classifications.push(ExpenseClassification::new(
                cmd.project_id,
                line.expense_type.clone(),
                line.description.clone(),
                tag,
                amount,
            ));
        }

        self.budgets.append_classifications(&classifications).await?;

        let summary = ClassificationSummary::from_classifications(&classifications);
        let event = ExpensesClassified {
            event_id: EventId::new(),
            project_id: cmd.project_id,
            line_count: classifications.len(),
            summary,
            occurred_at: Timestamp::now(),
        };
        notify_event(self.notifier.as_ref(), &event).await;

        Ok(ClassifyExpensesResult {
            classifications,
            summary,
        })
    }
}
