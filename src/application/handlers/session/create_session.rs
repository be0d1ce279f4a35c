//! CreateSessionHandler - Command handler for opening flights.

use std::sync::Arc;
use rand::Rng;

use crate::domain::foundation::{ActorId, CommandMetadata, EventId, SessionId};
use crate::domain::session::{
    metadata_keys, SessionCreated, SessionError, SessionMetadata, SessionSnapshot,
};
use crate::ports::{AccessChecker, AccessResult, EventPublisher, SessionRegistry};

use super::publish::publish_event;

/// Command to open a new flight.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub session_id: SessionId,
    pub creator: ActorId,
    pub metadata: SessionMetadata,
}

/// Result of successful session creation.
#[derive(Debug, Clone)]
pub struct CreateSessionResult {
    pub snapshot: SessionSnapshot,
    pub event: SessionCreated,
}

/// Handler for opening flights.
pub struct CreateSessionHandler {
    registry: Arc<dyn SessionRegistry>,
    access_checker: Arc<dyn AccessChecker>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateSessionHandler {
    pub fn new(
        registry: Arc<dyn SessionRegistry>,
        access_checker: Arc<dyn AccessChecker>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            registry,
            access_checker,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateSessionCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateSessionResult, SessionError> {
        // 1. Check access (fail-secure)
        let access = self
            .access_checker
            .can_create_session(&cmd.creator)
            .await
            .map_err(|e| {
                tracing::warn!(actor = %cmd.creator, error = %e, "Access check failed");
                SessionError::unavailable(e.message)
            })?;
        if let AccessResult::Denied(reason) = access {
            tracing::warn!(actor = %cmd.creator, ?reason, "Flight creation denied");
            return Err(SessionError::AccessDenied(reason));
        }

        // 2. Register the session
        let mut session_metadata = cmd.metadata;
        if !session_metadata.contains_key(metadata_keys::FLIGHT_NUMBER) {
            session_metadata.insert(metadata_keys::FLIGHT_NUMBER, flight_number().to_string());
        }

        let snapshot = self
            .registry
            .create(cmd.session_id.clone(), session_metadata)
            .await?;

        tracing::info!(
            session_id = %snapshot.id,
            actor = %cmd.creator,
            flight_number = snapshot.metadata.get(metadata_keys::FLIGHT_NUMBER).unwrap_or_default(),
            "Flight opened"
        );

        // 3. Publish event
        let event = SessionCreated {
            event_id: EventId::new(),
            session_id: snapshot.id.clone(),
            created_by: Some(cmd.creator),
            metadata: snapshot.metadata.clone(),
            created_at: snapshot.created_at,
        };
        publish_event(self.event_publisher.as_ref(), &event, &metadata).await;

        Ok(CreateSessionResult { snapshot, event })
    }
}

/// Display flight number in 1000..=9999.
fn flight_number() -> u16 {
    rand::thread_rng().gen_range(1000..=9999)
}
