//! Session domain events.
//!
//! Events published when a flight's roster or lifecycle changes:
//! - `SessionCreated` - New flight opened
//! - `RoleClaimed` - Actor took a role (possibly swapping out of another)
//! - `RoleReleased` - Actor gave up a role
//! - `SessionClosed` - Roster frozen
//! - `SessionDeleted` - Flight removed, on request or by the idle reaper

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, ActorId, EventId, RoleKey, SessionId, Timestamp,
};

use super::SessionMetadata;

// ════════════════════════════════════════════════════════════════════════════
// SessionCreated
// ════════════════════════════════════════════════════════════════════════════

/// Published when a new flight session is opened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCreated {
    pub event_id: EventId,
    pub session_id: SessionId,

    /// Actor who opened the flight, when known.
    pub created_by: Option<ActorId>,

    pub metadata: SessionMetadata,
    pub created_at: Timestamp,
}

domain_event!(SessionCreated, "flight.created", at = created_at);

// ════════════════════════════════════════════════════════════════════════════
// RoleClaimed
// ════════════════════════════════════════════════════════════════════════════

/// Published when an actor takes a role.
///
/// `previous_role` is set when the claim swapped the actor out of another
/// role; no separate `RoleReleased` is emitted for that half of the swap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleClaimed {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub actor_id: ActorId,
    pub role: RoleKey,
    pub previous_role: Option<RoleKey>,
    pub claimed_at: Timestamp,
}

domain_event!(RoleClaimed, "flight.role_claimed", at = claimed_at);

// ════════════════════════════════════════════════════════════════════════════
// RoleReleased
// ════════════════════════════════════════════════════════════════════════════

/// Published when an actor leaves a role without taking another.
///
/// Also emitted for a swap that lost its target to capacity, since the
/// actor's old role stays released.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleReleased {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub actor_id: ActorId,
    pub role: RoleKey,
    pub released_at: Timestamp,
}

domain_event!(RoleReleased, "flight.role_released", at = released_at);

// ════════════════════════════════════════════════════════════════════════════
// SessionClosed
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClosed {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub closed_by: Option<ActorId>,
    pub closed_at: Timestamp,
}

domain_event!(SessionClosed, "flight.closed", at = closed_at);

// ════════════════════════════════════════════════════════════════════════════
// SessionDeleted
// ════════════════════════════════════════════════════════════════════════════

/// Why a session was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletionReason {
    /// An operator asked for it.
    Requested,
    /// The idle reaper expired it.
    Idle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDeleted {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub reason: DeletionReason,

    /// Number of actors still holding roles at deletion.
    pub assigned_count: usize,

    pub deleted_at: Timestamp,
}

domain_event!(SessionDeleted, "flight.deleted", at = deleted_at);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, EventEnvelope};

    fn sid() -> SessionId {
        SessionId::new("msg-42").unwrap()
    }

    #[test]
    fn role_claimed_envelope_carries_previous_role() {
        let event = RoleClaimed {
            event_id: EventId::new(),
            session_id: sid(),
            actor_id: ActorId::new("alice").unwrap(),
            role: RoleKey::new("steward").unwrap(),
            previous_role: Some(RoleKey::new("passenger").unwrap()),
            claimed_at: Timestamp::now(),
        };

        let envelope = EventEnvelope::from_event(&event).unwrap();
        assert_eq!(envelope.event_type, "flight.role_claimed");
        assert_eq!(envelope.aggregate_id, "msg-42");
        assert_eq!(envelope.aggregate_type, "Session");
        assert_eq!(envelope.payload["previous_role"], "passenger");

        let back: RoleClaimed = envelope.payload_as().unwrap();
        assert_eq!(back.role.as_str(), "steward");
    }

    #[test]
    fn session_deleted_serializes_reason() {
        let event = SessionDeleted {
            event_id: EventId::new(),
            session_id: sid(),
            reason: DeletionReason::Idle,
            assigned_count: 3,
            deleted_at: Timestamp::now(),
        };

        assert_eq!(event.event_type(), "flight.deleted");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["reason"], "idle");
    }

    #[test]
    fn session_created_keeps_metadata_order() {
        let event = SessionCreated {
            event_id: EventId::new(),
            session_id: sid(),
            created_by: None,
            metadata: SessionMetadata::new().with("gate", "B4").with("arrival", "ULLI"),
            created_at: Timestamp::now(),
        };

        let json = serde_json::to_string(&event).unwrap();
        let gate = json.find("\"gate\"").unwrap();
        let arrival = json.find("\"arrival\"").unwrap();
        assert!(gate < arrival);
    }
}
