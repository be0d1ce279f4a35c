//! Read-only views of a session's assignment state.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Capacity;
use crate::domain::foundation::{ActorId, RoleKey, SessionId, SessionStatus, Timestamp};

use super::SessionMetadata;

/// One role's current holders, with the catalog details needed to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRoster {
    pub key: RoleKey,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    pub capacity: Capacity,
    /// Holders in the order they claimed the role.
    pub members: Vec<ActorId>,
}

impl RoleRoster {
    /// Free slots left; `None` when the role is unbounded.
    pub fn remaining(&self) -> Option<u32> {
        self.capacity.remaining(self.members.len())
    }

    pub fn is_full(&self) -> bool {
        self.capacity.is_exhausted_by(self.members.len())
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Point-in-time copy of a session.
///
/// `roles` always lists every catalog role, in catalog order, including
/// roles nobody holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub status: SessionStatus,
    pub metadata: SessionMetadata,
    pub roles: Vec<RoleRoster>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SessionSnapshot {
    pub fn role(&self, key: &str) -> Option<&RoleRoster> {
        self.roles.iter().find(|r| r.key.as_str() == key)
    }

    /// The role `actor` holds in this snapshot, if any.
    pub fn role_of(&self, actor: &ActorId) -> Option<&RoleKey> {
        self.roles
            .iter()
            .find(|r| r.members.contains(actor))
            .map(|r| &r.key)
    }

    /// Number of actors holding any role.
    pub fn assigned_count(&self) -> usize {
        self.roles.iter().map(|r| r.members.len()).sum()
    }
}
