//! Project repository port.

use crate::domain::foundation::{DomainError, InitiativeId, ProjectId};
use crate::domain::project::{Project, ProjectStatus};
use async_trait::async_trait;

/// Repository port for Project aggregate persistence.
///
/// Projects are one-to-one with their originating initiative;
/// implementations must reject a second project for the same initiative
/// so that two racing evaluation closes cannot both spawn one.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Save a newly spawned project.
    ///
    /// # Errors
    ///
    /// - `ConcurrencyConflict` if a project already exists for the
    ///   originating initiative
    /// - `StorageError` on persistence failure
    async fn save_new(&self, project: &Project) -> Result<(), DomainError>;

    /// Update an existing project with a version check.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project does not exist
    /// - `ConcurrencyConflict` on a stale version
    async fn update(&self, project: &Project) -> Result<(), DomainError>;

    /// Find a project by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError>;

    /// Find the project spawned from an initiative, if any.
    async fn find_by_initiative(
        &self,
        initiative_id: &InitiativeId,
    ) -> Result<Option<Project>, DomainError>;

    /// List projects in a given lifecycle state.
    async fn list_by_status(&self, status: ProjectStatus) -> Result<Vec<Project>, DomainError>;
}
