//! In-memory project repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, InitiativeId, ProjectId};
use crate::domain::project::{Project, ProjectStatus};
use crate::ports::ProjectRepository;

/// In-memory project store.
#[derive(Default)]
pub struct InMemoryProjectRepository {
    projects: RwLock<HashMap<ProjectId, Project>>,
}

impl InMemoryProjectRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn save_new(&self, project: &Project) -> Result<(), DomainError> {
        let mut store = self.projects.write().expect("project lock poisoned");

        let exists = store
            .values()
            .any(|p| p.initiative_id() == project.initiative_id());
        if exists {
            return Err(DomainError::new(
                ErrorCode::ConcurrencyConflict,
                format!(
                    "A project already exists for initiative {}",
                    project.initiative_id()
                ),
            ));
        }

        store.insert(*project.id(), project.clone());
        Ok(())
    }

    async fn update(&self, project: &Project) -> Result<(), DomainError> {
        let mut store = self.projects.write().expect("project lock poisoned");
        let stored = store.get_mut(project.id()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::ProjectNotFound,
                format!("Project not found: {}", project.id()),
            )
        })?;

        if stored.version() != project.version() {
            return Err(DomainError::new(
                ErrorCode::ConcurrencyConflict,
                format!(
                    "Project {} was modified concurrently (stored v{}, caller v{})",
                    project.id(),
                    stored.version(),
                    project.version()
                ),
            ));
        }

        let mut next = project.clone();
        next.set_version(project.version() + 1);
        *stored = next;
        Ok(())
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        let store = self.projects.read().expect("project lock poisoned");
        Ok(store.get(id).cloned())
    }

    async fn find_by_initiative(
        &self,
        initiative_id: &InitiativeId,
    ) -> Result<Option<Project>, DomainError> {
        let store = self.projects.read().expect("project lock poisoned");
        Ok(store
            .values()
            .find(|p| p.initiative_id() == initiative_id)
            .cloned())
    }

    async fn list_by_status(&self, status: ProjectStatus) -> Result<Vec<Project>, DomainError> {
        let store = self.projects.read().expect("project lock poisoned");
        Ok(store
            .values()
            .filter(|p| p.status() == status)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Money, Percentage, UserId};
    use crate::domain::initiative::{Initiative, InvestmentBands};

    fn project() -> Project {
        let initiative = Initiative::new(
            InitiativeId::new(),
            "Network refresh".to_string(),
            "Campus network refresh".to_string(),
            "Infrastructure".to_string(),
            Money::from_major(80_000_000),
            Percentage::new(20),
            UserId::new("requester-1").unwrap(),
            &InvestmentBands::default(),
        )
        .unwrap();
        Project::spawn_from(&initiative)
    }

    #[tokio::test]
    async fn save_and_find_round_trip() {
        let repo = InMemoryProjectRepository::new();
        let p = project();
        repo.save_new(&p).await.unwrap();

        assert!(repo.find_by_id(p.id()).await.unwrap().is_some());
        assert!(repo
            .find_by_initiative(p.initiative_id())
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn second_project_for_same_initiative_is_rejected() {
        let repo = InMemoryProjectRepository::new();
        let p = project();
        repo.save_new(&p).await.unwrap();

        // A racing evaluation close producing a second spawn must fail.
        let racing = Project::spawn_from(
            &Initiative::new(
                *p.initiative_id(),
                "Network refresh".to_string(),
                "Campus network refresh".to_string(),
                "Infrastructure".to_string(),
                Money::from_major(80_000_000),
                Percentage::new(20),
                UserId::new("requester-1").unwrap(),
                &InvestmentBands::default(),
            )
            .unwrap(),
        );
        // spawn_from copies the initiative id, which is what collides.
        let err = repo.save_new(&racing).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ConcurrencyConflict);
    }

    #[tokio::test]
    async fn stale_update_fails_with_conflict() {
        let repo = InMemoryProjectRepository::new();
        let p = project();
        repo.save_new(&p).await.unwrap();

        repo.update(&p).await.unwrap();
        let err = repo.update(&p).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ConcurrencyConflict);
    }

    #[tokio::test]
    async fn list_by_status_filters() {
        let repo = InMemoryProjectRepository::new();
        let p = project();
        repo.save_new(&p).await.unwrap();

        assert_eq!(
            repo.list_by_status(ProjectStatus::ReserveBank)
                .await
                .unwrap()
                .len(),
            1
        );
        assert!(repo
            .list_by_status(ProjectStatus::InExecution)
            .await
            .unwrap()
            .is_empty());
    }
}
