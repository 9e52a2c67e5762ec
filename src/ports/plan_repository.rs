//! Annual plan repository port.

use crate::domain::foundation::DomainError;
use crate::domain::plan::AnnualPlan;
use async_trait::async_trait;

/// Repository port for AnnualPlan persistence (one plan per year).
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Save a new plan.
    ///
    /// # Errors
    ///
    /// - `ConcurrencyConflict` if a plan already exists for the year
    async fn save(&self, plan: &AnnualPlan) -> Result<(), DomainError>;

    /// Update a plan with a version check.
    ///
    /// # Errors
    ///
    /// - `PlanNotFound` if the plan does not exist
    /// - `ConcurrencyConflict` on a stale version
    async fn update(&self, plan: &AnnualPlan) -> Result<(), DomainError>;

    /// Find the plan for a year. Returns `None` if not found.
    async fn find_by_year(&self, year: i32) -> Result<Option<AnnualPlan>, DomainError>;
}
