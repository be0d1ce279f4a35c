//! Session registry port.
//!
//! The registry is the sole owner of live session state. Callers never get
//! a reference to a `Session`; every operation returns an owned snapshot.
//!
//! # Concurrency
//!
//! Implementations must make each operation atomic with respect to the
//! session it touches: a claim's release, capacity check and insert happen
//! as one critical section. Operations on different sessions must not
//! serialize behind each other.
//!
//! An actor holds a role in at most one open session at a time. Closed
//! sessions keep their frozen roster and do not count.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::catalog::RoleCatalog;
use crate::domain::foundation::{ActorId, RoleKey, SessionId};
use crate::domain::session::{RoleChange, SessionError, SessionMetadata, SessionSnapshot};

/// Result of a successful claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimOutcome {
    pub change: RoleChange,
    pub snapshot: SessionSnapshot,
}

/// Result of a successful release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseOutcome {
    /// The role the actor gave up.
    pub role: RoleKey,
    /// State of the session the role was released in.
    pub snapshot: SessionSnapshot,
}

/// Port for the in-process session store.
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// The catalog every session in this registry uses.
    fn catalog(&self) -> &RoleCatalog;

    /// Registers a new open session with every role empty.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if a live session uses `id`
    async fn create(
        &self,
        id: SessionId,
        metadata: SessionMetadata,
    ) -> Result<SessionSnapshot, SessionError>;

    /// # Errors
    ///
    /// - `NotFound` if no live session uses `id`
    async fn get(&self, id: &SessionId) -> Result<SessionSnapshot, SessionError>;

    /// Snapshots of all live sessions, oldest first.
    async fn list(&self) -> Vec<SessionSnapshot>;

    /// Freezes a session's assignments.
    ///
    /// # Errors
    ///
    /// - `NotFound`
    /// - `AlreadyClosed` if the session is not open
    async fn close(&self, id: &SessionId) -> Result<SessionSnapshot, SessionError>;

    /// Removes a session regardless of status, returning its final state.
    ///
    /// # Errors
    ///
    /// - `NotFound`
    async fn delete(&self, id: &SessionId) -> Result<SessionSnapshot, SessionError>;

    /// Assigns `actor` to `role` in session `id`, swapping out of any role
    /// they already hold there.
    ///
    /// # Errors
    ///
    /// - `NotFound`
    /// - `AssignedElsewhere` if the actor holds a role in another open session
    /// - `NotModifiable`, `UnknownRole`, `AlreadyHoldingRole`, `RoleFull`
    ///   as for [`Session::claim_role`](crate::domain::session::Session::claim_role)
    async fn claim_role(
        &self,
        id: &SessionId,
        actor: &ActorId,
        role: &str,
    ) -> Result<ClaimOutcome, SessionError>;

    /// # Errors
    ///
    /// - `NotFound`
    /// - `NotModifiable`
    /// - `NotAssigned` if the actor holds no role in this session
    async fn release_role(
        &self,
        id: &SessionId,
        actor: &ActorId,
    ) -> Result<ReleaseOutcome, SessionError>;

    /// Releases the actor's role in the one open session where they hold
    /// one.
    ///
    /// # Errors
    ///
    /// - `NotAssigned` if the actor holds no role in any open session
    async fn release_role_anywhere(&self, actor: &ActorId) -> Result<ReleaseOutcome, SessionError>;

    /// Deletes every session unchanged for longer than `max_idle`, returning
    /// their final snapshots.
    async fn reap_idle(&self, max_idle: Duration) -> Vec<SessionSnapshot>;

    /// Number of live sessions.
    async fn len(&self) -> usize;
}
