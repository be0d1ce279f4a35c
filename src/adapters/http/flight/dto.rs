//! HTTP DTOs for flight endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::RoleKind;
use crate::domain::foundation::SessionStatus;
use crate::domain::session::{RoleRoster, SessionMetadata, SessionSnapshot};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to open a new flight.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFlightRequest {
    pub session_id: String,
    #[serde(default)]
    pub metadata: SessionMetadata,
}

/// Query parameters for listing flights.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFlightsQuery {
    #[serde(default)]
    pub status: Option<SessionStatus>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct RoleKindResponse {
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// `None` for unbounded roles.
    pub capacity: Option<u32>,
}

impl From<&RoleKind> for RoleKindResponse {
    fn from(kind: &RoleKind) -> Self {
        Self {
            key: kind.key().to_string(),
            label: kind.label().to_string(),
            emoji: kind.emoji().map(str::to_string),
            capacity: kind.capacity().limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleRosterResponse {
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    pub capacity: Option<u32>,
    pub remaining: Option<u32>,
    pub members: Vec<String>,
}

impl From<RoleRoster> for RoleRosterResponse {
    fn from(roster: RoleRoster) -> Self {
        Self {
            remaining: roster.remaining(),
            capacity: roster.capacity.limit(),
            key: roster.key.to_string(),
            label: roster.label,
            emoji: roster.emoji,
            members: roster.members.into_iter().map(String::from).collect(),
        }
    }
}

/// Full flight view, with the rendered card.
#[derive(Debug, Clone, Serialize)]
pub struct FlightResponse {
    pub id: String,
    pub status: SessionStatus,
    pub metadata: SessionMetadata,
    pub roles: Vec<RoleRosterResponse>,
    pub card: String,
    pub created_at: String,
    pub updated_at: String,
}

impl FlightResponse {
    pub fn new(snapshot: SessionSnapshot, card: String) -> Self {
        Self {
            id: snapshot.id.to_string(),
            status: snapshot.status,
            metadata: snapshot.metadata,
            roles: snapshot.roles.into_iter().map(Into::into).collect(),
            card,
            created_at: snapshot.created_at.to_rfc3339(),
            updated_at: snapshot.updated_at.to_rfc3339(),
        }
    }
}

/// Flight row for list responses.
#[derive(Debug, Clone, Serialize)]
pub struct FlightSummaryResponse {
    pub id: String,
    pub status: SessionStatus,
    pub summary: String,
    pub assigned: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlightListResponse {
    pub items: Vec<FlightSummaryResponse>,
    pub total: usize,
    /// All summaries, one per line, ready to post as a message.
    pub text: String,
}

/// Result of a claim or release.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentResponse {
    pub session_id: String,
    pub role: String,
    /// Role given up by a swap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_role: Option<String>,
    pub flight: FlightResponse,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }
}
