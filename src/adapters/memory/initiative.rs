//! In-memory initiative repository.
//!
//! Reference implementation used by the test suite and suitable for
//! embedding. Implements the optimistic-concurrency contract of the
//! port: updates compare-and-swap on the aggregate version.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, InitiativeId};
use crate::domain::initiative::{Initiative, InitiativeStatus, StateTransitionRecord};
use crate::ports::InitiativeRepository;

/// In-memory initiative store.
#[derive(Default)]
pub struct InMemoryInitiativeRepository {
    initiatives: RwLock<HashMap<InitiativeId, Initiative>>,
    transitions: RwLock<Vec<StateTransitionRecord>>,
}

impl InMemoryInitiativeRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InitiativeRepository for InMemoryInitiativeRepository {
    async fn save(&self, initiative: &Initiative) -> Result<(), DomainError> {
        let mut store = self.initiatives.write().expect("initiative lock poisoned");
        store.insert(*initiative.id(), initiative.clone());
        Ok(())
    }

    async fn update(&self, initiative: &Initiative) -> Result<(), DomainError> {
        let mut store = self.initiatives.write().expect("initiative lock poisoned");
        let stored = store.get_mut(initiative.id()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::InitiativeNotFound,
                format!("Initiative not found: {}", initiative.id()),
            )
        })?;

        if stored.version() != initiative.version() {
            return Err(DomainError::new(
                ErrorCode::ConcurrencyConflict,
                format!(
                    "Initiative {} was modified concurrently (stored v{}, caller v{})",
                    initiative.id(),
                    stored.version(),
                    initiative.version()
                ),
            ));
        }

        let mut next = initiative.clone();
        next.set_version(initiative.version() + 1);
        *stored = next;
        Ok(())
    }

    async fn find_by_id(&self, id: &InitiativeId) -> Result<Option<Initiative>, DomainError> {
        let store = self.initiatives.read().expect("initiative lock poisoned");
        Ok(store.get(id).cloned())
    }

    async fn list_by_status(
        &self,
        status: InitiativeStatus,
    ) -> Result<Vec<Initiative>, DomainError> {
        let store = self.initiatives.read().expect("initiative lock poisoned");
        Ok(store
            .values()
            .filter(|i| i.status() == status)
            .cloned()
            .collect())
    }

    async fn append_transition(&self, record: &StateTransitionRecord) -> Result<(), DomainError> {
        let mut log = self.transitions.write().expect("transition lock poisoned");
        log.push(record.clone());
        Ok(())
    }

    async fn transitions_for(
        &self,
        id: &InitiativeId,
    ) -> Result<Vec<StateTransitionRecord>, DomainError> {
        let log = self.transitions.read().expect("transition lock poisoned");
        let mut records: Vec<StateTransitionRecord> = log
            .iter()
            .filter(|r| r.initiative_id() == id)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.occurred_at().cmp(b.occurred_at()));
        Ok(records)
    }
}
