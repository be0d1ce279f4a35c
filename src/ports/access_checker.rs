//! Access control port for flight creation.
//!
//! Opening a flight is a privileged action; claiming, releasing, closing and
//! deleting are not gated here. The create handler consults this port, the
//! registry never does.
//!
//! # Design
//!
//! The AccessChecker follows a **fail-secure** design: when the check itself
//! errors, the caller refuses to create and reports the collaborator as
//! unavailable.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ActorId, DomainError};

/// Port for checking whether an actor may open flights.
#[async_trait]
pub trait AccessChecker: Send + Sync {
    async fn can_create_session(&self, actor: &ActorId) -> Result<AccessResult, DomainError>;
}

/// Result of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessResult {
    Allowed,
    Denied(AccessDeniedReason),
}

impl AccessResult {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessResult::Allowed)
    }

    /// Converts the result to a Result type, with denied becoming an error.
    pub fn into_result(self) -> Result<(), AccessDeniedReason> {
        match self {
            AccessResult::Allowed => Ok(()),
            AccessResult::Denied(reason) => Err(reason),
        }
    }
}

/// Reason why access was denied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccessDeniedReason {
    /// The actor lacks a dispatcher grant.
    NotPermitted,
}

impl AccessDeniedReason {
    /// Get a user-facing message for the denial reason.
    pub fn user_message(&self) -> &'static str {
        match self {
            AccessDeniedReason::NotPermitted => "You are not allowed to open flights.",
        }
    }
}
