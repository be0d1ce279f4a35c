//! Event plumbing shared by every flight event.
//!
//! All events in this domain describe something that happened to one session,
//! so the session id is the routing key and the aggregate type is fixed.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::{SessionId, Timestamp};

/// Aggregate type stamped on every envelope.
pub const SESSION_AGGREGATE: &str = "Session";

/// A fact about one session, ready to be wrapped and published.
pub trait DomainEvent: Send + Sync {
    /// Routing key, e.g. `flight.role_claimed`.
    fn event_type(&self) -> &'static str;

    fn session_id(&self) -> &SessionId;

    fn occurred_at(&self) -> Timestamp;

    fn event_id(&self) -> &EventId;
}

/// Implements [`DomainEvent`] for a struct with `event_id` and `session_id`
/// fields.
///
/// ```ignore
/// domain_event!(SessionClosed, "flight.closed", at = closed_at);
/// ```
#[macro_export]
macro_rules! domain_event {
    ($event:ident, $event_type:literal, at = $at:ident) => {
        impl $crate::domain::foundation::DomainEvent for $event {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn session_id(&self) -> &$crate::domain::foundation::SessionId {
                &self.session_id
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.$at
            }

            fn event_id(&self) -> &$crate::domain::foundation::EventId {
                &self.event_id
            }
        }
    };
}

/// Unique id of one published event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who caused an event and through which entry point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,

    /// `None` for system-initiated changes such as idle expiry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<String>,

    /// Entry point, e.g. `http` or `idle-reaper`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Serialized event as it travels over the bus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub event_id: EventId,
    pub event_type: String,
    /// The session id.
    pub aggregate_id: String,
    pub aggregate_type: String,
    pub occurred_at: Timestamp,
    /// The event struct itself, as JSON.
    pub payload: JsonValue,
    pub metadata: EventMetadata,
}

impl EventEnvelope {
    /// Wraps `event` with empty metadata.
    pub fn from_event<T>(event: &T) -> Result<Self, serde_json::Error>
    where
        T: DomainEvent + Serialize,
    {
        Ok(Self {
            event_id: event.event_id().clone(),
            event_type: event.event_type().to_string(),
            aggregate_id: event.session_id().to_string(),
            aggregate_type: SESSION_AGGREGATE.to_string(),
            occurred_at: event.occurred_at(),
            payload: serde_json::to_value(event)?,
            metadata: EventMetadata::default(),
        })
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.metadata.correlation_id = Some(id.into());
        self
    }

    pub fn with_actor_id(mut self, id: impl Into<String>) -> Self {
        self.metadata.actor_id = Some(id.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.metadata.source = Some(source.into());
        self
    }

    /// Decodes the payload back into a concrete event.
    pub fn payload_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}
