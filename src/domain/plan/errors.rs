//! Annual plan error types.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Annual plan errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// No plan exists for the year.
    NotFound(i32),
    /// A plan already exists for the year.
    YearTaken(i32),
    /// Plan or project state disallows the operation.
    InvalidState(String),
    /// Validation failed (budget exceeded, duplicate assignment).
    ValidationFailed { field: String, message: String },
    /// Lost update detected.
    Conflict(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl PlanError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::NotFound(_) => ErrorCode::PlanNotFound,
            PlanError::YearTaken(_) => ErrorCode::ValidationFailed,
            PlanError::InvalidState(_) => ErrorCode::InvalidTransition,
            PlanError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PlanError::Conflict(_) => ErrorCode::ConcurrencyConflict,
            PlanError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            PlanError::NotFound(year) => format!("No annual plan found for {}", year),
            PlanError::YearTaken(year) => format!("An annual plan for {} already exists", year),
            PlanError::InvalidState(msg) => format!("Invalid state: {}", msg),
            PlanError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            PlanError::Conflict(msg) => format!("Concurrent update detected: {}", msg),
            PlanError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PlanError {}

impl From<DomainError> for PlanError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidTransition => PlanError::InvalidState(err.message),
            ErrorCode::ConcurrencyConflict => PlanError::Conflict(err.message),
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => PlanError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => PlanError::Infrastructure(err.to_string()),
        }
    }
}
