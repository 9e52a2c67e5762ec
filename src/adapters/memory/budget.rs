//! In-memory budget repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::budget::{
    Budget, BudgetChangeRequest, ExpenseClassification, MonthlyExecutionRecord,
};
use crate::domain::foundation::{ChangeRequestId, DomainError, ErrorCode, Period, ProjectId};
use crate::ports::BudgetRepository;

/// In-memory budget store: budgets, change requests, execution records
/// keyed by (project, period), and the expense classification ledger.
#[derive(Default)]
pub struct InMemoryBudgetRepository {
    budgets: RwLock<HashMap<ProjectId, Budget>>,
    change_requests: RwLock<HashMap<ChangeRequestId, BudgetChangeRequest>>,
    executions: RwLock<HashMap<(ProjectId, Period), MonthlyExecutionRecord>>,
    classifications: RwLock<Vec<ExpenseClassification>>,
}

impl InMemoryBudgetRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BudgetRepository for InMemoryBudgetRepository {
    async fn save_budget(&self, budget: &Budget) -> Result<(), DomainError> {
        let mut store = self.budgets.write().expect("budget lock poisoned");
        if store.contains_key(budget.project_id()) {
            return Err(DomainError::new(
                ErrorCode::ConcurrencyConflict,
                format!("A budget already exists for project {}", budget.project_id()),
            ));
        }
        store.insert(*budget.project_id(), budget.clone());
        Ok(())
    }

    async fn update_budget(&self, budget: &Budget) -> Result<(), DomainError> {
        let mut store = self.budgets.write().expect("budget lock poisoned");
        let stored = store.get_mut(budget.project_id()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::BudgetNotFound,
                format!("No budget found for project {}", budget.project_id()),
            )
        })?;

        if stored.version() != budget.version() {
            return Err(DomainError::new(
                ErrorCode::ConcurrencyConflict,
                format!(
                    "Budget for project {} was modified concurrently",
                    budget.project_id()
                ),
            ));
        }

        let mut next = budget.clone();
        next.set_version(budget.version() + 1);
        *stored = next;
        Ok(())
    }

    async fn find_budget(&self, project_id: &ProjectId) -> Result<Option<Budget>, DomainError> {
        let store = self.budgets.read().expect("budget lock poisoned");
        Ok(store.get(project_id).cloned())
    }

    async fn save_change_request(
        &self,
        request: &BudgetChangeRequest,
    ) -> Result<(), DomainError> {
        let mut store = self
            .change_requests
            .write()
            .expect("change request lock poisoned");
        store.insert(*request.id(), request.clone());
        Ok(())
    }

    async fn update_change_request(
        &self,
        request: &BudgetChangeRequest,
    ) -> Result<(), DomainError> {
        let mut store = self
            .change_requests
            .write()
            .expect("change request lock poisoned");
        let stored = store.get_mut(request.id()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::ChangeRequestNotFound,
                format!("Change request not found: {}", request.id()),
            )
        })?;

        if stored.version() != request.version() {
            return Err(DomainError::new(
                ErrorCode::ConcurrencyConflict,
                format!("Change request {} was modified concurrently", request.id()),
            ));
        }

        let mut next = request.clone();
        next.set_version(request.version() + 1);
        *stored = next;
        Ok(())
    }

    async fn find_change_request(
        &self,
        id: &ChangeRequestId,
    ) -> Result<Option<BudgetChangeRequest>, DomainError> {
        let store = self
            .change_requests
            .read()
            .expect("change request lock poisoned");
        Ok(store.get(id).cloned())
    }

    async fn change_requests_for(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<BudgetChangeRequest>, DomainError> {
        let store = self
            .change_requests
            .read()
            .expect("change request lock poisoned");
        let mut requests: Vec<BudgetChangeRequest> = store
            .values()
            .filter(|r| r.project_id() == project_id)
            .cloned()
            .collect();
        requests.sort_by(|a, b| a.requested_at().cmp(b.requested_at()));
        Ok(requests)
    }

    async fn upsert_execution(
        &self,
        record: &MonthlyExecutionRecord,
    ) -> Result<(), DomainError> {
        let mut store = self.executions.write().expect("execution lock poisoned");
        store.insert((*record.project_id(), record.period()), record.clone());
        Ok(())
    }

    async fn executions_for(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<MonthlyExecutionRecord>, DomainError> {
        let store = self.executions.read().expect("execution lock poisoned");
        Ok(store
            .values()
            .filter(|r| r.project_id() == project_id)
            .cloned()
            .collect())
    }

    async fn append_classifications(
        &self,
        classifications: &[ExpenseClassification],
    ) -> Result<(), DomainError> {
        let mut ledger = self
            .classifications
            .write()
            .expect("classification lock poisoned");
        ledger.extend_from_slice(classifications);
        Ok(())
    }

    async fn classifications_for(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<ExpenseClassification>, DomainError> {
        let ledger = self
            .classifications
            .read()
            .expect("classification lock poisoned");
        Ok(ledger
            .iter()
            .filter(|c| c.project_id() == project_id)
            .cloned()
            .collect())
    }
}
