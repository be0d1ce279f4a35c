//! SessionStatus enum for tracking the lifecycle of a flight session.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a session.
///
/// Valid transitions:
/// - Open -> Closed
/// - Open -> Deleted
/// - Closed -> Deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Open,
    Closed,
    Deleted,
}

impl SessionStatus {
    /// Returns true if role assignments may still change.
    pub fn is_mutable(&self) -> bool {
        matches!(self, SessionStatus::Open)
    }
}

impl StateMachine for SessionStatus {
    fn successors(&self) -> &'static [Self] {
        match self {
            SessionStatus::Open => &[SessionStatus::Closed, SessionStatus::Deleted],
            SessionStatus::Closed => &[SessionStatus::Deleted],
            SessionStatus::Deleted => &[],
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Open => "Open",
            SessionStatus::Closed => "Closed",
            SessionStatus::Deleted => "Deleted",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_open() {
        assert_eq!(SessionStatus::default(), SessionStatus::Open);
    }

    #[test]
    fn only_open_is_mutable() {
        assert!(SessionStatus::Open.is_mutable());
        assert!(!SessionStatus::Closed.is_mutable());
        assert!(!SessionStatus::Deleted.is_mutable());
    }

    #[test]
    fn nothing_leads_back_to_open() {
        for status in [SessionStatus::Open, SessionStatus::Closed, SessionStatus::Deleted] {
            assert!(!status.can_transition_to(&SessionStatus::Open));
        }
    }

    #[test]
    fn closed_can_only_be_deleted() {
        assert_eq!(
            SessionStatus::Closed.successors(),
            &[SessionStatus::Deleted]
        );
        assert!(!SessionStatus::Closed.can_transition_to(&SessionStatus::Closed));
    }

    #[test]
    fn deleted_is_terminal() {
        assert!(SessionStatus::Deleted.is_terminal());
        assert!(!SessionStatus::Open.is_terminal());
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::Closed).unwrap(),
            "\"closed\""
        );
        let status: SessionStatus = serde_json::from_str("\"open\"").unwrap();
        assert_eq!(status, SessionStatus::Open);
    }
}
