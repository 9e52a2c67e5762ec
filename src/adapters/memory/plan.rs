//! In-memory annual plan repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::plan::AnnualPlan;
use crate::ports::PlanRepository;

/// In-memory plan store, keyed by year.
#[derive(Default)]
pub struct InMemoryPlanRepository {
    plans: RwLock<HashMap<i32, AnnualPlan>>,
}

impl InMemoryPlanRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlanRepository for InMemoryPlanRepository {
    async fn save(&self, plan: &AnnualPlan) -> Result<(), DomainError> {
        let mut store = self.plans.write().expect("plan lock poisoned");
        if store.contains_key(&plan.year()) {
            return Err(DomainError::new(
                ErrorCode::ConcurrencyConflict,
                format!("An annual plan for {} already exists", plan.year()),
            ));
        }
        store.insert(plan.year(), plan.clone());
        Ok(())
    }

    async fn update(&self, plan: &AnnualPlan) -> Result<(), DomainError> {
        let mut store = self.plans.write().expect("plan lock poisoned");
        let stored = store.get_mut(&plan.year()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::PlanNotFound,
                format!("No annual plan found for {}", plan.year()),
            )
        })?;

        if stored.version() != plan.version() {
            return Err(DomainError::new(
                ErrorCode::ConcurrencyConflict,
                format!("Annual plan {} was modified concurrently", plan.year()),
            ));
        }

        let mut next = plan.clone();
        next.set_version(plan.version() + 1);
        *stored = next;
        Ok(())
    }

    async fn find_by_year(&self, year: i32) -> Result<Option<AnnualPlan>, DomainError> {
        let store = self.plans.read().expect("plan lock poisoned");
        Ok(store.get(&year).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Money, PlanId};

    fn plan() -> AnnualPlan {
        AnnualPlan::new(
            PlanId::new(),
            2026,
            "2026 plan".to_string(),
            Money::from_major(1_000_000_000),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn save_and_find_round_trip() {
        let repo = InMemoryPlanRepository::new();
        repo.save(&plan()).await.unwrap();
        assert!(repo.find_by_year(2026).await.unwrap().is_some());
        assert!(repo.find_by_year(2027).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_year_is_rejected() {
        let repo = InMemoryPlanRepository::new();
        repo.save(&plan()).await.unwrap();
        let err = repo.save(&plan()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ConcurrencyConflict);
    }

    #[tokio::test]
    async fn stale_update_fails_with_conflict() {
        let repo = InMemoryPlanRepository::new();
        let p = plan();
        repo.save(&p).await.unwrap();

        repo.update(&p).await.unwrap();
        let err = repo.update(&p).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ConcurrencyConflict);
    }
}
