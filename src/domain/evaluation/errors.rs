//! Evaluation-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, EvaluationId, InitiativeId, UserId};

/// Committee evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// Evaluation was not found.
    NotFound(EvaluationId),
    /// Initiative being evaluated was not found.
    InitiativeNotFound(InitiativeId),
    /// The evaluator already submitted for this initiative.
    Duplicate {
        initiative_id: InitiativeId,
        evaluator_id: UserId,
    },
    /// Closing a round with zero submissions.
    NoEvaluations(InitiativeId),
    /// The initiative is not in the evaluation stage.
    NotInEvaluation(String),
    /// Validation failed (out-of-range sub-scores).
    ValidationFailed { field: String, message: String },
    /// Only the original evaluator may revise a submission.
    Forbidden(String),
    /// Lost update detected.
    Conflict(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl EvaluationError {
    pub fn duplicate(initiative_id: InitiativeId, evaluator_id: UserId) -> Self {
        EvaluationError::Duplicate {
            initiative_id,
            evaluator_id,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EvaluationError::NotFound(_) => ErrorCode::EvaluationNotFound,
            EvaluationError::InitiativeNotFound(_) => ErrorCode::InitiativeNotFound,
            EvaluationError::Duplicate { .. } => ErrorCode::DuplicateEvaluation,
            EvaluationError::NoEvaluations(_) => ErrorCode::NoEvaluations,
            EvaluationError::NotInEvaluation(_) => ErrorCode::InvalidTransition,
            EvaluationError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            EvaluationError::Forbidden(_) => ErrorCode::Forbidden,
            EvaluationError::Conflict(_) => ErrorCode::ConcurrencyConflict,
            EvaluationError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            EvaluationError::NotFound(id) => format!("Evaluation not found: {}", id),
            EvaluationError::InitiativeNotFound(id) => format!("Initiative not found: {}", id),
            EvaluationError::Duplicate {
                initiative_id,
                evaluator_id,
            } => format!(
                "Evaluator {} already evaluated initiative {}",
                evaluator_id, initiative_id
            ),
            EvaluationError::NoEvaluations(id) => {
                format!("No evaluations submitted for initiative {}", id)
            }
            EvaluationError::NotInEvaluation(status) => {
                format!("Initiative is not in evaluation (current state: {})", status)
            }
            EvaluationError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            EvaluationError::Forbidden(msg) => format!("Forbidden: {}", msg),
            EvaluationError::Conflict(msg) => format!("Concurrent update detected: {}", msg),
            EvaluationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for EvaluationError {}

impl From<DomainError> for EvaluationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ConcurrencyConflict => EvaluationError::Conflict(err.message),
            ErrorCode::Forbidden => EvaluationError::Forbidden(err.message),
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => EvaluationError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => EvaluationError::Infrastructure(err.to_string()),
        }
    }
}
