//! Budget repository port.
//!
//! Covers the budget aggregate, change requests, monthly execution
//! records and the append-only expense classification ledger.

use crate::domain::budget::{
    Budget, BudgetChangeRequest, ExpenseClassification, MonthlyExecutionRecord,
};
use crate::domain::foundation::{ChangeRequestId, DomainError, ProjectId};
use async_trait::async_trait;

/// Repository port for budget persistence.
///
/// Change-request approval and monthly-execution recomputation for the
/// same project must serialize (version check on the budget) so the
/// cumulative executed total never loses an update.
#[async_trait]
pub trait BudgetRepository: Send + Sync {
    /// Save a new budget (one per project).
    ///
    /// # Errors
    ///
    /// - `ConcurrencyConflict` if a budget already exists for the project
    async fn save_budget(&self, budget: &Budget) -> Result<(), DomainError>;

    /// Update a budget with a version check.
    ///
    /// # Errors
    ///
    /// - `BudgetNotFound` if no budget exists for the project
    /// - `ConcurrencyConflict` on a stale version
    async fn update_budget(&self, budget: &Budget) -> Result<(), DomainError>;

    /// Find the budget for a project. Returns `None` if not created yet.
    async fn find_budget(&self, project_id: &ProjectId) -> Result<Option<Budget>, DomainError>;

    /// Save a new change request.
    async fn save_change_request(
        &self,
        request: &BudgetChangeRequest,
    ) -> Result<(), DomainError>;

    /// Update a change request with a version check.
    ///
    /// # Errors
    ///
    /// - `ChangeRequestNotFound` if the request does not exist
    /// - `ConcurrencyConflict` on a stale version
    async fn update_change_request(
        &self,
        request: &BudgetChangeRequest,
    ) -> Result<(), DomainError>;

    /// Find a change request by ID. Returns `None` if not found.
    async fn find_change_request(
        &self,
        id: &ChangeRequestId,
    ) -> Result<Option<BudgetChangeRequest>, DomainError>;

    /// List change requests for a project, ordered by request time.
    async fn change_requests_for(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<BudgetChangeRequest>, DomainError>;

    /// Upsert the execution record for its (project, period) key.
    ///
    /// A second write for the same period overwrites, never duplicates.
    async fn upsert_execution(&self, record: &MonthlyExecutionRecord)
        -> Result<(), DomainError>;

    /// List execution records for a project (unordered; callers sort by
    /// period).
    async fn executions_for(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<MonthlyExecutionRecord>, DomainError>;

    /// Append classified expenses to the ledger (append-only).
    async fn append_classifications(
        &self,
        classifications: &[ExpenseClassification],
    ) -> Result<(), DomainError>;

    /// List the classified expenses of a project.
    async fn classifications_for(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<ExpenseClassification>, DomainError>;
}
