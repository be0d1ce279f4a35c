//! Session aggregate entity.
//!
//! A session is one flight: a set of capacity-bounded roles that actors
//! claim, swap and release until the session is closed.
//!
//! # Invariants
//!
//! - every catalog role has a member list, possibly empty
//! - an actor appears in at most one member list
//! - `actor_roles[a] == r` exactly when `a` is in `role_members[r]`
//! - a limited role never holds more members than its limit
//! - assignments only change while the session is `Open`

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::catalog::RoleCatalog;
use crate::domain::foundation::{
    ActorId, RoleKey, SessionId, SessionStatus, StateMachine, Timestamp,
};

use super::{RoleRoster, SessionError, SessionMetadata, SessionSnapshot};

/// Outcome of a successful claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleChange {
    /// The role now held.
    pub role: RoleKey,
    /// The role given up by the swap, if the actor held one.
    pub previous: Option<RoleKey>,
}

/// Session aggregate.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    metadata: SessionMetadata,
    catalog: Arc<RoleCatalog>,
    status: SessionStatus,

    /// Holders per role, in claim order.
    role_members: HashMap<RoleKey, Vec<ActorId>>,

    /// Inverse of `role_members`.
    actor_roles: HashMap<ActorId, RoleKey>,

    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Session {
    /// Creates an open session with every catalog role empty.
    pub fn new(id: SessionId, metadata: SessionMetadata, catalog: Arc<RoleCatalog>) -> Self {
        let role_members = catalog
            .keys()
            .map(|key| (key.clone(), Vec::new()))
            .collect();
        let now = Timestamp::now();

        Self {
            id,
            metadata,
            catalog,
            status: SessionStatus::Open,
            role_members,
            actor_roles: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn metadata(&self) -> &SessionMetadata {
        &self.metadata
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    /// Returns the role `actor` holds here, if any.
    pub fn role_of(&self, actor: &ActorId) -> Option<&RoleKey> {
        self.actor_roles.get(actor)
    }

    pub fn holds_any_role(&self, actor: &ActorId) -> bool {
        self.actor_roles.contains_key(actor)
    }

    /// Current holders of `role`, in claim order. Empty for unknown roles.
    pub fn members(&self, role: &RoleKey) -> &[ActorId] {
        self.role_members
            .get(role)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Time of the last assignment or status change.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns true if nothing has changed since `cutoff`.
    pub fn is_idle_since(&self, cutoff: &Timestamp) -> bool {
        self.updated_at.is_before(cutoff)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Assignments
    // ─────────────────────────────────────────────────────────────────────────

    /// Assigns `actor` to `role`, giving up any role they held before.
    ///
    /// # Errors
    ///
    /// - `NotModifiable` if the session is not open
    /// - `UnknownRole` if `role` is not in the catalog
    /// - `AlreadyHoldingRole` if the actor already holds `role` (no change)
    /// - `RoleFull` if `role` has no free slot. The previous role, if any,
    ///   has already been released and stays released.
    pub fn claim_role(&mut self, actor: &ActorId, role: &str) -> Result<RoleChange, SessionError> {
        self.ensure_mutable()?;

        let kind = self.catalog.kind_by_str(role)?;
        let role = kind.key().clone();
        let capacity = kind.capacity();

        if self.actor_roles.get(actor) == Some(&role) {
            return Err(SessionError::AlreadyHoldingRole(role));
        }

        let previous = self.detach(actor);
        if previous.is_some() {
            self.touch();
        }

        let members = self.role_members.entry(role.clone()).or_default();
        if capacity.is_exhausted_by(members.len()) {
            return Err(SessionError::RoleFull {
                role,
                released: previous,
                at: self.updated_at,
            });
        }

        members.push(actor.clone());
        self.actor_roles.insert(actor.clone(), role.clone());
        self.touch();

        Ok(RoleChange { role, previous })
    }

    /// Removes `actor` from whatever role they hold.
    ///
    /// # Errors
    ///
    /// - `NotModifiable` if the session is not open
    /// - `NotAssigned` if the actor holds no role here
    pub fn release_role(&mut self, actor: &ActorId) -> Result<RoleKey, SessionError> {
        self.ensure_mutable()?;

        let role = self
            .detach(actor)
            .ok_or_else(|| SessionError::NotAssigned(actor.clone()))?;
        self.touch();
        Ok(role)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Freezes assignments. Holders stay visible.
    ///
    /// # Errors
    ///
    /// - `AlreadyClosed` if the session is already closed
    /// - `NotFound` if the session was deleted
    pub fn close(&mut self) -> Result<(), SessionError> {
        match self.status {
            SessionStatus::Closed => Err(SessionError::AlreadyClosed(self.id.clone())),
            SessionStatus::Deleted => Err(SessionError::NotFound(self.id.clone())),
            SessionStatus::Open => {
                self.status = self.status.transition_to(SessionStatus::Closed)?;
                self.touch();
                Ok(())
            }
        }
    }

    /// Marks the session deleted. Idempotent.
    pub fn mark_deleted(&mut self) {
        if self.status.can_transition_to(&SessionStatus::Deleted) {
            self.status = SessionStatus::Deleted;
            self.touch();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Views
    // ─────────────────────────────────────────────────────────────────────────

    /// Copies the current state, listing roles in catalog order.
    pub fn snapshot(&self) -> SessionSnapshot {
        let roles = self
            .catalog
            .all_kinds()
            .iter()
            .map(|kind| RoleRoster {
                key: kind.key().clone(),
                label: kind.label().to_string(),
                emoji: kind.emoji().map(str::to_string),
                capacity: kind.capacity(),
                members: self.members(kind.key()).to_vec(),
            })
            .collect();

        SessionSnapshot {
            id: self.id.clone(),
            status: self.status,
            metadata: self.metadata.clone(),
            roles,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_mutable(&self) -> Result<(), SessionError> {
        if self.status.is_mutable() {
            Ok(())
        } else {
            Err(SessionError::not_modifiable(self.id.clone(), self.status))
        }
    }

    /// Drops `actor` from both maps, returning the role they held.
    fn detach(&mut self, actor: &ActorId) -> Option<RoleKey> {
        let role = self.actor_roles.remove(actor)?;
        if let Some(members) = self.role_members.get_mut(&role) {
            members.retain(|m| m != actor);
        }
        Some(role)
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }

    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        let forward_ok = self.role_members.iter().all(|(role, members)| {
            let within_capacity = self
                .catalog
                .kind(role)
                .map(|k| k.capacity().limit().map_or(true, |l| members.len() <= l as usize))
                .unwrap_or(false);
            within_capacity && members.iter().all(|m| self.actor_roles.get(m) == Some(role))
        });
        let assigned: usize = self.role_members.values().map(Vec::len).sum();
        forward_ok && assigned == self.actor_roles.len()
    }
}
