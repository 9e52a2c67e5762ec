//! In-memory committee evaluation repository.
//!
//! Enforces the (initiative, evaluator) uniqueness under a single write
//! lock, so the second concurrent submitter fails instead of silently
//! overwriting.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::evaluation::CommitteeEvaluation;
use crate::domain::foundation::{DomainError, ErrorCode, EvaluationId, InitiativeId, UserId};
use crate::ports::EvaluationRepository;

/// In-memory evaluation store.
#[derive(Default)]
pub struct InMemoryEvaluationRepository {
    evaluations: RwLock<HashMap<EvaluationId, CommitteeEvaluation>>,
}

impl InMemoryEvaluationRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EvaluationRepository for InMemoryEvaluationRepository {
    async fn insert_new(&self, evaluation: &CommitteeEvaluation) -> Result<(), DomainError> {
        let mut store = self.evaluations.write().expect("evaluation lock poisoned");

        let duplicate = store.values().any(|e| {
            e.initiative_id() == evaluation.initiative_id()
                && e.evaluator_id() == evaluation.evaluator_id()
        });
        if duplicate {
            return Err(DomainError::new(
                ErrorCode::DuplicateEvaluation,
                format!(
                    "Evaluator {} already evaluated initiative {}",
                    evaluation.evaluator_id(),
                    evaluation.initiative_id()
                ),
            ));
        }

        store.insert(*evaluation.id(), evaluation.clone());
        Ok(())
    }

    async fn update(&self, evaluation: &CommitteeEvaluation) -> Result<(), DomainError> {
        let mut store = self.evaluations.write().expect("evaluation lock poisoned");
        if !store.contains_key(evaluation.id()) {
            return Err(DomainError::new(
                ErrorCode::EvaluationNotFound,
                format!("Evaluation not found: {}", evaluation.id()),
            ));
        }
        store.insert(*evaluation.id(), evaluation.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &EvaluationId,
    ) -> Result<Option<CommitteeEvaluation>, DomainError> {
        let store = self.evaluations.read().expect("evaluation lock poisoned");
        Ok(store.get(id).cloned())
    }

    async fn find_by_evaluator(
        &self,
        initiative_id: &InitiativeId,
        evaluator_id: &UserId,
    ) -> Result<Option<CommitteeEvaluation>, DomainError> {
        let store = self.evaluations.read().expect("evaluation lock poisoned");
        Ok(store
            .values()
            .find(|e| e.initiative_id() == initiative_id && e.evaluator_id() == evaluator_id)
            .cloned())
    }

    async fn list_for_initiative(
        &self,
        initiative_id: &InitiativeId,
    ) -> Result<Vec<CommitteeEvaluation>, DomainError> {
        let store = self.evaluations.read().expect("evaluation lock poisoned");
        let mut evaluations: Vec<CommitteeEvaluation> = store
            .values()
            .filter(|e| e.initiative_id() == initiative_id)
            .cloned()
            .collect();
        evaluations.sort_by(|a, b| a.evaluated_at().cmp(b.evaluated_at()));
        Ok(evaluations)
    }
}
