//! Project-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, InitiativeId, ProjectId};

/// Project-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    /// Project was not found.
    NotFound(ProjectId),
    /// A project already exists for the initiative (one-to-one).
    AlreadyExists(InitiativeId),
    /// State-machine edge disallowed.
    InvalidTransition { from: String, to: String },
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Lost update detected.
    Conflict(String),
    /// Actor lacks the required capability.
    Forbidden(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl ProjectError {
    pub fn not_found(id: ProjectId) -> Self {
        ProjectError::NotFound(id)
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ProjectError::NotFound(_) => ErrorCode::ProjectNotFound,
            ProjectError::AlreadyExists(_) => ErrorCode::ConcurrencyConflict,
            ProjectError::InvalidTransition { .. } => ErrorCode::InvalidTransition,
            ProjectError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ProjectError::Conflict(_) => ErrorCode::ConcurrencyConflict,
            ProjectError::Forbidden(_) => ErrorCode::Forbidden,
            ProjectError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ProjectError::NotFound(id) => format!("Project not found: {}", id),
            ProjectError::AlreadyExists(id) => {
                format!("A project already exists for initiative {}", id)
            }
            ProjectError::InvalidTransition { from, to } => {
                format!("Invalid transition from {} to {}", from, to)
            }
            ProjectError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ProjectError::Conflict(msg) => format!("Concurrent update detected: {}", msg),
            ProjectError::Forbidden(msg) => format!("Forbidden: {}", msg),
            ProjectError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ProjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ProjectError {}

impl From<DomainError> for ProjectError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidTransition => ProjectError::InvalidTransition {
                from: err.details.get("from").cloned().unwrap_or_default(),
                to: err.details.get("to").cloned().unwrap_or_default(),
            },
            ErrorCode::ConcurrencyConflict => ProjectError::Conflict(err.message),
            ErrorCode::Forbidden => ProjectError::Forbidden(err.message),
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => ProjectError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ProjectError::Infrastructure(err.to_string()),
        }
    }
}
