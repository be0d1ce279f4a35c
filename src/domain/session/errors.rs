//! Session-specific error types.
//!
//! Every inbound operation returns either a snapshot or exactly one of these.
//! None of them is fatal and none carries presentation text beyond a
//! diagnostic `Display`.

use thiserror::Error;

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::{
    ActorId, ErrorCode, RoleKey, SessionId, SessionStatus, Timestamp, ValidationError,
};
use crate::ports::AccessDeniedReason;

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No live session has this identifier.
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    /// A live session already uses this identifier.
    #[error("Session already exists: {0}")]
    AlreadyExists(SessionId),

    /// The role key is not declared in the catalog.
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// The role's capacity is exhausted.
    ///
    /// `released` names the role the actor gave up as part of the attempted
    /// swap; a failed swap does not restore it. `at` is the session's
    /// `updated_at` after the attempt, i.e. the release time when one happened.
    #[error("Role '{role}' is full")]
    RoleFull {
        role: RoleKey,
        released: Option<RoleKey>,
        at: Timestamp,
    },

    /// The actor already holds exactly this role.
    #[error("Actor already holds role '{0}'")]
    AlreadyHoldingRole(RoleKey),

    /// The actor holds a role in another open session.
    #[error("Actor {actor} already holds a role in session {session}")]
    AssignedElsewhere { actor: ActorId, session: SessionId },

    /// The actor holds no role in the session (or anywhere, for
    /// registry-wide release).
    #[error("Actor {0} holds no role")]
    NotAssigned(ActorId),

    /// Assignments cannot change once a session is closed or deleted.
    #[error("Session {id} is {status} and cannot be modified")]
    NotModifiable { id: SessionId, status: SessionStatus },

    /// Close was requested on a session that is not open.
    #[error("Session {0} is already closed")]
    AlreadyClosed(SessionId),

    /// The creator is not permitted to open sessions.
    #[error("Access denied: {0:?}")]
    AccessDenied(AccessDeniedReason),

    /// Input failed validation before reaching the registry.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A collaborator (e.g. the permission provider) failed.
    #[error("Unavailable: {0}")]
    Unavailable(String),
}

impl SessionError {
    pub fn not_modifiable(id: SessionId, status: SessionStatus) -> Self {
        SessionError::NotModifiable { id, status }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        SessionError::Unavailable(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::AlreadyExists(_) => ErrorCode::SessionAlreadyExists,
            SessionError::UnknownRole(_) => ErrorCode::UnknownRole,
            SessionError::RoleFull { .. } => ErrorCode::RoleFull,
            SessionError::AlreadyHoldingRole(_) => ErrorCode::AlreadyHoldingRole,
            SessionError::AssignedElsewhere { .. } => ErrorCode::AssignedElsewhere,
            SessionError::NotAssigned(_) => ErrorCode::NotAssigned,
            SessionError::NotModifiable { .. } => ErrorCode::SessionNotModifiable,
            SessionError::AlreadyClosed(_) => ErrorCode::AlreadyClosed,
            SessionError::AccessDenied(_) => ErrorCode::Forbidden,
            SessionError::Validation(_) => ErrorCode::ValidationFailed,
            SessionError::Unavailable(_) => ErrorCode::InternalError,
        }
    }
}

impl From<CatalogError> for SessionError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownRole(key) => SessionError::UnknownRole(key),
            CatalogError::Validation(v) => SessionError::Validation(v),
            other => SessionError::Unavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid() -> SessionId {
        SessionId::new("msg-1").unwrap()
    }

    #[test]
    fn codes_cover_the_taxonomy() {
        let pilot = RoleKey::new("pilot").unwrap();
        let alice = ActorId::new("alice").unwrap();

        assert_eq!(SessionError::NotFound(sid()).code(), ErrorCode::SessionNotFound);
        assert_eq!(
            SessionError::AlreadyExists(sid()).code(),
            ErrorCode::SessionAlreadyExists
        );
        assert_eq!(
            SessionError::UnknownRole("chef".into()).code(),
            ErrorCode::UnknownRole
        );
        assert_eq!(
            SessionError::RoleFull { role: pilot.clone(), released: None, at: Timestamp::now() }.code(),
            ErrorCode::RoleFull
        );
        assert_eq!(
            SessionError::AlreadyHoldingRole(pilot).code(),
            ErrorCode::AlreadyHoldingRole
        );
        assert_eq!(
            SessionError::AssignedElsewhere { actor: alice.clone(), session: sid() }.code(),
            ErrorCode::AssignedElsewhere
        );
        assert_eq!(SessionError::NotAssigned(alice).code(), ErrorCode::NotAssigned);
        assert_eq!(
            SessionError::not_modifiable(sid(), SessionStatus::Closed).code(),
            ErrorCode::SessionNotModifiable
        );
        assert_eq!(SessionError::AlreadyClosed(sid()).code(), ErrorCode::AlreadyClosed);
    }

    #[test]
    fn catalog_unknown_role_maps_to_unknown_role() {
        let err: SessionError = CatalogError::UnknownRole("chef".into()).into();
        assert_eq!(err, SessionError::UnknownRole("chef".into()));
    }

    #[test]
    fn not_modifiable_display_mentions_status() {
        let err = SessionError::not_modifiable(sid(), SessionStatus::Closed);
        assert_eq!(err.to_string(), "Session msg-1 is Closed and cannot be modified");
    }
}
