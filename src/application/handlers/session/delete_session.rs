//! DeleteSessionHandler - Command handler for removing a flight.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, EventId, SessionId};
use crate::domain::session::{DeletionReason, SessionDeleted, SessionError, SessionSnapshot};
use crate::ports::{EventPublisher, SessionRegistry};

use super::publish::publish_event;

#[derive(Debug, Clone)]
pub struct DeleteSessionCommand {
    pub session_id: SessionId,
}

pub struct DeleteSessionHandler {
    registry: Arc<dyn SessionRegistry>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl DeleteSessionHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            registry,
            event_publisher,
        }
    }

    /// Removes the flight whatever its status, returning its final state.
    pub async fn handle(
        &self,
        cmd: DeleteSessionCommand,
        metadata: CommandMetadata,
    ) -> Result<SessionSnapshot, SessionError> {
        let snapshot = self.registry.delete(&cmd.session_id).await?;

        tracing::info!(session_id = %snapshot.id, "Flight deleted");

        let event = deleted_event(&snapshot, DeletionReason::Requested);
        publish_event(self.event_publisher.as_ref(), &event, &metadata).await;

        Ok(snapshot)
    }
}

pub(crate) fn deleted_event(snapshot: &SessionSnapshot, reason: DeletionReason) -> SessionDeleted {
    SessionDeleted {
        event_id: EventId::new(),
        session_id: snapshot.id.clone(),
        reason,
        assigned_count: snapshot.assigned_count(),
        deleted_at: snapshot.updated_at,
    }
}
