//! State machine trait for lifecycle status enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions across entity lifecycles (Initiative, Project, Plan).

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define the explicit adjacency table of valid transitions
/// and get validated transition methods for free. The table is the single
/// source of truth; nothing infers edges from ordering or naming.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    ///
    /// This is the preferred way to change state, as it ensures
    /// the transition is valid according to the adjacency table.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
