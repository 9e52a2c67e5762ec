//! Committee evaluation repository port.

use crate::domain::evaluation::CommitteeEvaluation;
use crate::domain::foundation::{DomainError, EvaluationId, InitiativeId, UserId};
use async_trait::async_trait;

/// Repository port for CommitteeEvaluation persistence.
///
/// Implementations must serialize concurrent inserts on the
/// (initiative, evaluator) key: the second writer fails, it never
/// silently overwrites. A unique constraint at the storage layer or an
/// equivalent application-level compare-and-swap both satisfy this.
#[async_trait]
pub trait EvaluationRepository: Send + Sync {
    /// Insert a new evaluation, enforcing one per (initiative, evaluator).
    ///
    /// # Errors
    ///
    /// - `DuplicateEvaluation` if the evaluator already submitted for
    ///   this initiative
    /// - `StorageError` on persistence failure
    async fn insert_new(&self, evaluation: &CommitteeEvaluation) -> Result<(), DomainError>;

    /// Update an existing evaluation (revision before the round closes).
    ///
    /// # Errors
    ///
    /// - `EvaluationNotFound` if the evaluation does not exist
    async fn update(&self, evaluation: &CommitteeEvaluation) -> Result<(), DomainError>;

    /// Find an evaluation by its ID. Returns `None` if not found.
    async fn find_by_id(
        &self,
        id: &EvaluationId,
    ) -> Result<Option<CommitteeEvaluation>, DomainError>;

    /// Find one evaluator's submission for an initiative.
    async fn find_by_evaluator(
        &self,
        initiative_id: &InitiativeId,
        evaluator_id: &UserId,
    ) -> Result<Option<CommitteeEvaluation>, DomainError>;

    /// List all evaluations submitted for an initiative.
    async fn list_for_initiative(
        &self,
        initiative_id: &InitiativeId,
    ) -> Result<Vec<CommitteeEvaluation>, DomainError>;
}
