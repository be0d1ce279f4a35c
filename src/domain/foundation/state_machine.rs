//! Transition table for lifecycle enums.

use std::fmt::Debug;

use super::ValidationError;

/// A status enum with a fixed set of legal successors per state.
pub trait StateMachine: Copy + PartialEq + Debug + 'static {
    /// States reachable in one step from `self`.
    fn successors(&self) -> &'static [Self];

    fn can_transition_to(&self, target: &Self) -> bool {
        self.successors().contains(target)
    }

    /// Returns `target` if the move is legal.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            return Ok(target);
        }
        Err(ValidationError::invalid_format(
            "status",
            format!("{:?} cannot become {:?}", self, target),
        ))
    }

    fn is_terminal(&self) -> bool {
        self.successors().is_empty()
    }
}
