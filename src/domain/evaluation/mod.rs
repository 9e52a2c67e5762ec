//! Evaluation module - expert committee scoring and round resolution.

mod aggregate;
mod dimensions;
mod errors;
mod events;
mod outcome;

pub use aggregate::CommitteeEvaluation;
pub use dimensions::{DimensionScores, EconomicScores, JustificationScores, TechnicalScores};
pub use errors::EvaluationError;
pub use events::{EvaluationRevised, EvaluationRoundClosed, EvaluationSubmitted};
pub use outcome::{resolve_round, EvaluationOutcome};
