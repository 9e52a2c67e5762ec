//! Initiative repository port.
//!
//! Defines the contract for persisting Initiative aggregates and their
//! append-only state history.
//!
//! # Design
//!
//! - **Transactional**: each handler invocation maps to one storage
//!   transaction; the aggregate update and the audit record commit
//!   together or not at all
//! - **Optimistic concurrency**: `update` compares the caller's loaded
//!   version against the stored one (compare-and-swap) and stores
//!   version + 1 on success

use crate::domain::foundation::{DomainError, InitiativeId};
use crate::domain::initiative::{Initiative, InitiativeStatus, StateTransitionRecord};
use async_trait::async_trait;

/// Repository port for Initiative aggregate persistence.
#[async_trait]
pub trait InitiativeRepository: Send + Sync {
    /// Save a new initiative.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, initiative: &Initiative) -> Result<(), DomainError>;

    /// Update an existing initiative with a version check.
    ///
    /// # Errors
    ///
    /// - `InitiativeNotFound` if the initiative does not exist
    /// - `ConcurrencyConflict` if the stored version differs from the
    ///   caller's loaded version
    async fn update(&self, initiative: &Initiative) -> Result<(), DomainError>;

    /// Find an initiative by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &InitiativeId) -> Result<Option<Initiative>, DomainError>;

    /// List initiatives in a given lifecycle state.
    async fn list_by_status(
        &self,
        status: InitiativeStatus,
    ) -> Result<Vec<Initiative>, DomainError>;

    /// Append a state transition record to the audit trail.
    ///
    /// Records are immutable once written.
    async fn append_transition(&self, record: &StateTransitionRecord) -> Result<(), DomainError>;

    /// Return the audit trail for an initiative, ordered by time.
    async fn transitions_for(
        &self,
        id: &InitiativeId,
    ) -> Result<Vec<StateTransitionRecord>, DomainError>;
}
