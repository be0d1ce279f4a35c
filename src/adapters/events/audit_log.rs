//! AuditLogHandler - writes every flight event to the tracing log.
//!
//! ```ignore
//! bus.subscribe_all(FLIGHT_EVENT_TYPES, Arc::new(AuditLogHandler));
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventHandler;

/// Every event type the session handlers publish.
pub const FLIGHT_EVENT_TYPES: &[&str] = &[
    "flight.created",
    "flight.role_claimed",
    "flight.role_released",
    "flight.closed",
    "flight.deleted",
];

/// Logs one structured line per event at `info` level, target `audit`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuditLogHandler;

#[async_trait]
impl EventHandler for AuditLogHandler {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        tracing::info!(
            target: "audit",
            event_id = %event.event_id,
            event_type = %event.event_type,
            session_id = %event.aggregate_id,
            actor = event.metadata.actor_id.as_deref().unwrap_or("-"),
            source = event.metadata.source.as_deref().unwrap_or("-"),
            correlation_id = event.metadata.correlation_id.as_deref().unwrap_or("-"),
            payload = %event.payload,
            "flight event"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "AuditLogHandler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::domain::foundation::{EventId, EventMetadata, Timestamp};
    use crate::ports::{EventPublisher, EventSubscriber};
    use std::sync::Arc;

    #[tokio::test]
    async fn handles_every_flight_event_without_error() {
        let bus = InMemoryEventBus::new();
        bus.subscribe_all(FLIGHT_EVENT_TYPES, Arc::new(AuditLogHandler));

        for event_type in FLIGHT_EVENT_TYPES {
            let envelope = EventEnvelope {
                event_id: EventId::new(),
                event_type: event_type.to_string(),
                aggregate_id: "m1".to_string(),
                aggregate_type: "Session".to_string(),
                occurred_at: Timestamp::now(),
                payload: serde_json::json!({ "session_id": "m1" }),
                metadata: EventMetadata::default(),
            };
            bus.publish(envelope).await.unwrap();
        }

        assert_eq!(bus.event_count(), FLIGHT_EVENT_TYPES.len());
    }
}
