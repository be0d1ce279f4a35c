//! Event emission shared by the session command handlers.

use serde::Serialize;

use crate::domain::foundation::{CommandMetadata, DomainEvent, EventEnvelope};
use crate::ports::EventPublisher;

/// Wraps `event`, stamps the command context onto it and publishes it.
///
/// The registry change has already committed when this runs, so failures are
/// logged and swallowed.
pub(crate) async fn publish_event<E>(
    publisher: &dyn EventPublisher,
    event: &E,
    metadata: &CommandMetadata,
) where
    E: DomainEvent + Serialize,
{
    let envelope = match EventEnvelope::from_event(event) {
        Ok(envelope) => metadata.stamp(envelope),
        Err(e) => {
            tracing::warn!(
                event_type = event.event_type(),
                error = %e,
                "Failed to serialize domain event"
            );
            return;
        }
    };

    if let Err(e) = publisher.publish(envelope).await {
        tracing::warn!(
            event_type = event.event_type(),
            session_id = %event.session_id(),
            error = %e,
            "Failed to publish domain event"
        );
    }
}
