//! Budget-specific error types.

use crate::domain::foundation::{ChangeRequestId, DomainError, ErrorCode, ProjectId};

/// Budget and accounting errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetError {
    /// No budget exists for the project.
    BudgetNotFound(ProjectId),
    /// The referenced project does not exist.
    ProjectNotFound(ProjectId),
    /// The change request does not exist.
    ChangeRequestNotFound(ChangeRequestId),
    /// The change request was already resolved.
    AlreadyResolved(ChangeRequestId),
    /// The project is not in an executable state.
    NotExecutable(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Lost update detected.
    Conflict(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl BudgetError {
    pub fn code(&self) -> ErrorCode {
        match self {
            BudgetError::BudgetNotFound(_) => ErrorCode::BudgetNotFound,
            BudgetError::ProjectNotFound(_) => ErrorCode::ProjectNotFound,
            BudgetError::ChangeRequestNotFound(_) => ErrorCode::ChangeRequestNotFound,
            BudgetError::AlreadyResolved(_) => ErrorCode::AlreadyResolved,
            BudgetError::NotExecutable(_) => ErrorCode::InvalidTransition,
            BudgetError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            BudgetError::Conflict(_) => ErrorCode::ConcurrencyConflict,
            BudgetError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            BudgetError::BudgetNotFound(id) => format!("No budget found for project {}", id),
            BudgetError::ProjectNotFound(id) => format!("Project not found: {}", id),
            BudgetError::ChangeRequestNotFound(id) => {
                format!("Change request not found: {}", id)
            }
            BudgetError::AlreadyResolved(id) => {
                format!("Change request {} has already been resolved", id)
            }
            BudgetError::NotExecutable(status) => {
                format!("Project is not in an executable state (current: {})", status)
            }
            BudgetError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            BudgetError::Conflict(msg) => format!("Concurrent update detected: {}", msg),
            BudgetError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for BudgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for BudgetError {}

impl From<DomainError> for BudgetError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ConcurrencyConflict => BudgetError::Conflict(err.message),
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => BudgetError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => BudgetError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_map_to_taxonomy() {
        assert_eq!(
            BudgetError::AlreadyResolved(ChangeRequestId::new()).code(),
            ErrorCode::AlreadyResolved
        );
        assert_eq!(
            BudgetError::BudgetNotFound(ProjectId::new()).code(),
            ErrorCode::BudgetNotFound
        );
        assert_eq!(
            BudgetError::NotExecutable("reserve_bank".to_string()).code(),
            ErrorCode::InvalidTransition
        );
    }
}
