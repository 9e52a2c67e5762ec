//! Initiative command handlers.

mod reprocess;
mod request_transition;
mod submit_initiative;

pub use reprocess::{ReprocessCommand, ReprocessInitiativeHandler, ReprocessResult};
pub use request_transition::{
    RequestTransitionCommand, RequestTransitionHandler, RequestTransitionResult,
};
pub use submit_initiative::{
    SubmitInitiativeCommand, SubmitInitiativeHandler, SubmitInitiativeResult,
};
