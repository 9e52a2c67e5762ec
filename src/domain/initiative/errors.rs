//! Initiative-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, InitiativeId};

/// Initiative-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitiativeError {
    /// Initiative was not found.
    NotFound(InitiativeId),
    /// State-machine edge disallowed.
    InvalidTransition { from: String, to: String },
    /// Content mutation attempted after activation.
    Activated,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Lost update detected on a versioned entity.
    Conflict(String),
    /// Actor lacks the required capability.
    Forbidden(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl InitiativeError {
    pub fn not_found(id: InitiativeId) -> Self {
        InitiativeError::NotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        InitiativeError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            InitiativeError::NotFound(_) => ErrorCode::InitiativeNotFound,
            InitiativeError::InvalidTransition { .. } => ErrorCode::InvalidTransition,
            InitiativeError::Activated => ErrorCode::InitiativeActivated,
            InitiativeError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            InitiativeError::Conflict(_) => ErrorCode::ConcurrencyConflict,
            InitiativeError::Forbidden(_) => ErrorCode::Forbidden,
            InitiativeError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            InitiativeError::NotFound(id) => format!("Initiative not found: {}", id),
            InitiativeError::InvalidTransition { from, to } => {
                format!("Invalid transition from {} to {}", from, to)
            }
            InitiativeError::Activated => "Cannot modify an activated initiative".to_string(),
            InitiativeError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            InitiativeError::Conflict(msg) => format!("Concurrent update detected: {}", msg),
            InitiativeError::Forbidden(msg) => format!("Forbidden: {}", msg),
            InitiativeError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for InitiativeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for InitiativeError {}

impl From<DomainError> for InitiativeError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidTransition => InitiativeError::InvalidTransition {
                from: err.details.get("from").cloned().unwrap_or_default(),
                to: err.details.get("to").cloned().unwrap_or_default(),
            },
            ErrorCode::InitiativeActivated => InitiativeError::Activated,
            ErrorCode::ConcurrencyConflict => InitiativeError::Conflict(err.message),
            ErrorCode::Forbidden => InitiativeError::Forbidden(err.message),
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => InitiativeError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => InitiativeError::Infrastructure(err.to_string()),
        }
    }
}
