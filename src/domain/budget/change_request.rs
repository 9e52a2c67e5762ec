//! Budget change request workflow.
//!
//! Requests are resolved exactly once. The approved amount may differ
//! from the requested amount; only the approved amount ever reaches the
//! project budget.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ChangeRequestId, DomainError, ErrorCode, Money, ProjectId, Timestamp, UserId, ValidationError,
};

/// Direction of a budget change.
///
/// A reallocation records the movement but does not itself change the
/// approved total: the net effect must be realized as a paired
/// increase/decrease at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    Increase,
    Decrease,
    Reallocation,
}

/// Resolution state of a change request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A request to change a project's approved CAPEX.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetChangeRequest {
    id: ChangeRequestId,
    project_id: ProjectId,
    change_type: ChangeType,
    requested_amount: Money,
    approved_amount: Option<Money>,
    justification: String,
    status: ChangeStatus,
    requested_by: UserId,
    resolved_by: Option<UserId>,
    notes: Option<String>,
    requested_at: Timestamp,
    resolved_at: Option<Timestamp>,
    version: u64,
}

impl BudgetChangeRequest {
    /// Creates a pending change request.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the justification is empty
    /// - `OutOfRange` if the requested amount is negative
    pub fn new(
        id: ChangeRequestId,
        project_id: ProjectId,
        change_type: ChangeType,
        requested_amount: Money,
        justification: String,
        requested_by: UserId,
    ) -> Result<Self, DomainError> {
        if justification.is_empty() {
            return Err(ValidationError::empty_field("justification").into());
        }
        let requested_amount = Money::try_non_negative(requested_amount.cents())?;

        Ok(Self {
            id,
            project_id,
            change_type,
            requested_amount,
            approved_amount: None,
            justification,
            status: ChangeStatus::Pending,
            requested_by,
            resolved_by: None,
            notes: None,
            requested_at: Timestamp::now(),
            resolved_at: None,
            version: 0,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ChangeRequestId {
        &self.id
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn change_type(&self) -> ChangeType {
        self.change_type
    }

    pub fn requested_amount(&self) -> Money {
        self.requested_amount
    }

    pub fn approved_amount(&self) -> Option<Money> {
        self.approved_amount
    }

    pub fn justification(&self) -> &str {
        &self.justification
    }

    pub fn status(&self) -> ChangeStatus {
        self.status
    }

    pub fn requested_by(&self) -> &UserId {
        &self.requested_by
    }

    pub fn resolved_by(&self) -> Option<&UserId> {
        self.resolved_by.as_ref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn requested_at(&self) -> &Timestamp {
        &self.requested_at
    }

    pub fn resolved_at(&self) -> Option<&Timestamp> {
        self.resolved_at.as_ref()
    }

    /// Returns the persistence version used for optimistic concurrency.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    /// Signed CAPEX delta this request applies once approved.
    pub fn capex_delta(&self) -> Money {
        let amount = self.approved_amount.unwrap_or(Money::ZERO);
        match self.change_type {
            ChangeType::Increase => amount,
            ChangeType::Decrease => -amount,
            ChangeType::Reallocation => Money::ZERO,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Resolution
    // ─────────────────────────────────────────────────────────────────────────

    /// Approves the request with the granted amount.
    ///
    /// # Errors
    ///
    /// - `AlreadyResolved` if the request is not pending
    /// - `OutOfRange` if the approved amount is negative
    pub fn approve(
        &mut self,
        approved_amount: Money,
        resolved_by: UserId,
        notes: Option<String>,
    ) -> Result<(), DomainError> {
        self.ensure_pending()?;
        let approved_amount = Money::try_non_negative(approved_amount.cents())?;

        self.status = ChangeStatus::Approved;
        self.approved_amount = Some(approved_amount);
        self.resolved_by = Some(resolved_by);
        self.notes = notes;
        self.resolved_at = Some(Timestamp::now());
        Ok(())
    }

    /// Rejects the request.
    ///
    /// # Errors
    ///
    /// - `AlreadyResolved` if the request is not pending
    pub fn reject(&mut self, resolved_by: UserId, notes: Option<String>) -> Result<(), DomainError> {
        self.ensure_pending()?;
        self.status = ChangeStatus::Rejected;
        self.resolved_by = Some(resolved_by);
        self.notes = notes;
        self.resolved_at = Some(Timestamp::now());
        Ok(())
    }

    fn ensure_pending(&self) -> Result<(), DomainError> {
        if self.status == ChangeStatus::Pending {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::AlreadyResolved,
                format!("Change request {} has already been resolved", self.id),
            ))
        }
    }
}
