//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Standard investment threshold must be below the high threshold")]
    ThresholdOrdering,

    #[error("Threshold '{0}' must be non-negative")]
    NegativeThreshold(&'static str),

    #[error("Committee approval threshold must be between 0 and 100")]
    InvalidApprovalThreshold,

    #[error("Activation CAPEX share must be between 0 and 100")]
    InvalidCapexShare,

    #[error("Overrun alert gap must be non-negative")]
    InvalidAlertGap,
}
