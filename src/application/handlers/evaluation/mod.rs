//! Committee evaluation command handlers.

mod close_evaluation;
mod revise_evaluation;
mod submit_evaluation;

#[cfg(test)]
pub(crate) mod test_support;

pub use close_evaluation::{
    CloseEvaluationCommand, CloseEvaluationHandler, CloseEvaluationResult,
};
pub use revise_evaluation::{
    ReviseEvaluationCommand, ReviseEvaluationHandler, ReviseEvaluationResult,
};
pub use submit_evaluation::{
    SubmitEvaluationCommand, SubmitEvaluationHandler, SubmitEvaluationResult,
};
