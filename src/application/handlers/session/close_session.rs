//! CloseSessionHandler - Command handler for freezing a flight's roster.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, EventId, SessionId};
use crate::domain::session::{SessionClosed, SessionError, SessionSnapshot};
use crate::ports::{EventPublisher, SessionRegistry};

use super::publish::publish_event;

#[derive(Debug, Clone)]
pub struct CloseSessionCommand {
    pub session_id: SessionId,
}

pub struct CloseSessionHandler {
    registry: Arc<dyn SessionRegistry>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CloseSessionHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            registry,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CloseSessionCommand,
        metadata: CommandMetadata,
    ) -> Result<SessionSnapshot, SessionError> {
        let snapshot = self.registry.close(&cmd.session_id).await?;

        tracing::info!(
            session_id = %snapshot.id,
            assigned = snapshot.assigned_count(),
            "Flight registration closed"
        );

        let event = SessionClosed {
            event_id: EventId::new(),
            session_id: snapshot.id.clone(),
            closed_by: metadata.actor_id.clone(),
            closed_at: snapshot.updated_at,
        };
        publish_event(self.event_publisher.as_ref(), &event, &metadata).await;

        Ok(snapshot)
    }
}
