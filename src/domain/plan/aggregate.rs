//! Annual investment plan aggregate.
//!
//! The plan pools the yearly CAPEX envelope. Reserve-bank projects are
//! assigned into it with a committed amount and a priority order; an
//! approved plan no longer accepts assignment changes.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, ErrorCode, Money, PlanId, ProjectId, StateMachine, Timestamp, UserId,
    ValidationError,
};

/// Lifecycle states of an annual plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Draft,
    InReview,
    Approved,
    InExecution,
    Closed,
}

impl PlanStatus {
    /// Returns the wire label for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Draft => "draft",
            PlanStatus::InReview => "in_review",
            PlanStatus::Approved => "approved",
            PlanStatus::InExecution => "in_execution",
            PlanStatus::Closed => "closed",
        }
    }
}

impl StateMachine for PlanStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PlanStatus::*;
        matches!(
            (self, target),
            (Draft, InReview)
                | (Draft, Approved)
                | (InReview, Approved)
                | (InReview, Draft)
                | (Approved, InExecution)
                | (InExecution, Closed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PlanStatus::*;
        match self {
            Draft => vec![InReview, Approved],
            InReview => vec![Approved, Draft],
            Approved => vec![InExecution],
            InExecution => vec![Closed],
            Closed => vec![],
        }
    }
}

impl std::fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One project's slot in the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanAssignment {
    pub project_id: ProjectId,
    pub amount: Money,
    pub priority_order: u32,
    pub notes: Option<String>,
    pub added_at: Timestamp,
}

/// Annual investment plan.
///
/// # Invariants
///
/// - `committed_budget` equals the sum of assignment amounts
/// - assignments cannot change once the plan is approved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualPlan {
    id: PlanId,
    year: i32,
    name: String,
    description: Option<String>,
    total_budget: Money,
    committed_budget: Money,
    executed_budget: Money,
    status: PlanStatus,
    approved_by: Option<UserId>,
    approved_at: Option<Timestamp>,
    assignments: Vec<PlanAssignment>,
    created_at: Timestamp,
    updated_at: Timestamp,
    version: u64,
}

impl AnnualPlan {
    /// Creates a draft plan for the year with its budget envelope.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is empty
    /// - `OutOfRange` if the budget is negative
    pub fn new(
        id: PlanId,
        year: i32,
        name: String,
        total_budget: Money,
    ) -> Result<Self, DomainError> {
        if name.is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        let total_budget = Money::try_non_negative(total_budget.cents())?;
        let now = Timestamp::now();

        Ok(Self {
            id,
            year,
            name,
            description: None,
            total_budget,
            committed_budget: Money::ZERO,
            executed_budget: Money::ZERO,
            status: PlanStatus::Draft,
            approved_by: None,
            approved_at: None,
            assignments: Vec::new(),
            created_at: now,
            updated_at: now,
            version: 0,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &PlanId {
        &self.id
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_budget(&self) -> Money {
        self.total_budget
    }

    pub fn committed_budget(&self) -> Money {
        self.committed_budget
    }

    pub fn executed_budget(&self) -> Money {
        self.executed_budget
    }

    /// Budget still available for assignment.
    pub fn available_budget(&self) -> Money {
        self.total_budget - self.committed_budget
    }

    pub fn status(&self) -> PlanStatus {
        self.status
    }

    pub fn approved_by(&self) -> Option<&UserId> {
        self.approved_by.as_ref()
    }

    pub fn approved_at(&self) -> Option<&Timestamp> {
        self.approved_at.as_ref()
    }

    pub fn assignments(&self) -> &[PlanAssignment] {
        &self.assignments
    }

    pub fn contains_project(&self, project_id: &ProjectId) -> bool {
        self.assignments.iter().any(|a| &a.project_id == project_id)
    }

    /// Returns the persistence version used for optimistic concurrency.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Assigns a project into the plan, committing its amount.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the plan no longer accepts changes
    /// - `ValidationFailed` if the project is already in the plan
    /// - `OutOfRange` if the amount exceeds the available budget
    pub fn assign_project(
        &mut self,
        project_id: ProjectId,
        amount: Money,
        priority_order: Option<u32>,
        notes: Option<String>,
    ) -> Result<(), DomainError> {
        self.ensure_mutable()?;

        if self.contains_project(&project_id) {
            return Err(DomainError::validation(
                "project_id",
                format!("Project {} is already in the {} plan", project_id, self.year),
            ));
        }

        let amount = Money::try_non_negative(amount.cents())?;
        if self.committed_budget + amount > self.total_budget {
            return Err(ValidationError::out_of_range(
                "amount",
                0,
                self.available_budget().cents(),
                amount.cents(),
            )
            .into());
        }

        let priority_order = priority_order.unwrap_or_else(|| {
            self.assignments
                .iter()
                .map(|a| a.priority_order)
                .max()
                .map_or(1, |max| max + 1)
        });

        self.assignments.push(PlanAssignment {
            project_id,
            amount,
            priority_order,
            notes,
            added_at: Timestamp::now(),
        });
        self.committed_budget += amount;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Removes a project from the plan, restoring its committed amount.
    ///
    /// Returns the amount released.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the plan no longer accepts changes
    /// - `ValidationFailed` if the project is not in the plan
    pub fn remove_project(&mut self, project_id: &ProjectId) -> Result<Money, DomainError> {
        self.ensure_mutable()?;

        let index = self
            .assignments
            .iter()
            .position(|a| &a.project_id == project_id)
            .ok_or_else(|| {
                DomainError::validation(
                    "project_id",
                    format!("Project {} is not in the {} plan", project_id, self.year),
                )
            })?;

        let assignment = self.assignments.remove(index);
        self.committed_budget -= assignment.amount;
        self.updated_at = Timestamp::now();
        Ok(assignment.amount)
    }

    /// Moves the plan through its lifecycle.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the edge is not allowed
    pub fn transition(&mut self, target: PlanStatus, actor: &UserId) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&target) {
            return Err(DomainError::new(
                ErrorCode::InvalidTransition,
                format!("Cannot transition plan from {} to {}", self.status, target),
            )
            .with_detail("from", self.status.as_str())
            .with_detail("to", target.as_str()));
        }

        self.status = target;
        let now = Timestamp::now();
        if target == PlanStatus::Approved {
            self.approved_by = Some(actor.clone());
            self.approved_at = Some(now);
        }
        self.updated_at = now;
        Ok(())
    }

    /// Replaces the executed rollup (recomputed from project budgets).
    pub fn set_executed_total(&mut self, total: Money) {
        self.executed_budget = total;
        self.updated_at = Timestamp::now();
    }

    fn ensure_mutable(&self) -> Result<(), DomainError> {
        match self.status {
            PlanStatus::Draft | PlanStatus::InReview => Ok(()),
            _ => Err(DomainError::new(
                ErrorCode::InvalidTransition,
                format!("Plan for {} no longer accepts changes ({})", self.year, self.status),
            )),
        }
    }
}
