//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the state machine trait, and error
//! types that form the vocabulary of the governance domain.

mod actor;
mod errors;
mod events;
mod ids;
mod money;
mod percentage;
mod period;
mod state_machine;
mod timestamp;

pub use actor::{Actor, ForceTransition, Role};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{DomainEvent, EventId};
pub use ids::{ChangeRequestId, EvaluationId, InitiativeId, PlanId, ProjectId, UserId};
pub use money::Money;
pub use percentage::Percentage;
pub use period::Period;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
