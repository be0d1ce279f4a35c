//! Command infrastructure for application handlers.
//!
//! Instead of each handler accepting `correlation_id`, `actor` and `source`
//! separately, they accept a single `CommandMetadata`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ActorId, EventEnvelope};

/// Metadata context for command handlers.
///
/// Carries correlation and actor context through command processing
/// and onto the emitted events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The actor executing this command, when there is one.
    ///
    /// `None` for system-initiated commands such as idle expiry.
    pub actor_id: Option<ActorId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates metadata for a command issued by an actor.
    pub fn new(actor_id: ActorId) -> Self {
        Self {
            actor_id: Some(actor_id),
            correlation_id: None,
            source: None,
        }
    }

    /// Creates metadata for a command the system issues on its own.
    pub fn system(source: impl Into<String>) -> Self {
        Self {
            actor_id: None,
            correlation_id: None,
            source: Some(source.into()),
        }
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if none was supplied.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the source, if set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Stamps this metadata onto an outgoing event envelope.
    pub fn stamp(&self, envelope: EventEnvelope) -> EventEnvelope {
        let mut envelope = envelope.with_correlation_id(self.correlation_id());
        if let Some(actor) = &self.actor_id {
            envelope = envelope.with_actor_id(actor.as_str());
        }
        if let Some(source) = &self.source {
            envelope = envelope.with_source(source.as_str());
        }
        envelope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EventMetadata, EventId, Timestamp};

    fn bare_envelope() -> EventEnvelope {
        EventEnvelope {
            event_id: EventId::new(),
            event_type: "session.closed".to_string(),
            aggregate_id: "flight-1".to_string(),
            aggregate_type: "Session".to_string(),
            occurred_at: Timestamp::now(),
            payload: serde_json::json!({}),
            metadata: EventMetadata::default(),
        }
    }

    #[test]
    fn keeps_supplied_correlation_id() {
        let meta = CommandMetadata::new(ActorId::new("alice").unwrap())
            .with_correlation_id("req-7");
        assert_eq!(meta.correlation_id(), "req-7");
    }

    #[test]
    fn generates_correlation_id_when_missing() {
        let meta = CommandMetadata::new(ActorId::new("alice").unwrap());
        assert!(!meta.correlation_id().is_empty());
    }

    #[test]
    fn system_metadata_has_no_actor() {
        let meta = CommandMetadata::system("reaper");
        assert!(meta.actor_id.is_none());
        assert_eq!(meta.source(), Some("reaper"));
    }

    #[test]
    fn stamp_copies_context_onto_envelope() {
        let meta = CommandMetadata::new(ActorId::new("bob").unwrap())
            .with_correlation_id("req-9")
            .with_source("http");

        let envelope = meta.stamp(bare_envelope());
        assert_eq!(envelope.metadata.correlation_id.as_deref(), Some("req-9"));
        assert_eq!(envelope.metadata.actor_id.as_deref(), Some("bob"));
        assert_eq!(envelope.metadata.source.as_deref(), Some("http"));
    }
}
