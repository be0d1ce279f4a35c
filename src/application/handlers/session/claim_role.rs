//! ClaimRoleHandler - Command handler for taking (or swapping into) a role.

use std::sync::Arc;

use crate::domain::foundation::{ActorId, CommandMetadata, EventId, RoleKey, SessionId};
use crate::domain::session::{RoleClaimed, RoleReleased, SessionError};
use crate::ports::{ClaimOutcome, EventPublisher, SessionRegistry};

use super::publish::publish_event;

/// Command to claim a role in a flight.
#[derive(Debug, Clone)]
pub struct ClaimRoleCommand {
    pub session_id: SessionId,
    pub actor: ActorId,
    /// Raw role key; validated against the catalog.
    pub role: String,
}

/// Handler for role claims.
pub struct ClaimRoleHandler {
    registry: Arc<dyn SessionRegistry>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ClaimRoleHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            registry,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: ClaimRoleCommand,
        metadata: CommandMetadata,
    ) -> Result<ClaimOutcome, SessionError> {
        let result = self
            .registry
            .claim_role(&cmd.session_id, &cmd.actor, &cmd.role)
            .await;

        match result {
            Ok(outcome) => {
                tracing::info!(
                    session_id = %cmd.session_id,
                    actor = %cmd.actor,
                    role = %outcome.change.role,
                    previous = ?outcome.change.previous.as_ref().map(RoleKey::as_str),
                    "Role claimed"
                );

                let event = RoleClaimed {
                    event_id: EventId::new(),
                    session_id: cmd.session_id,
                    actor_id: cmd.actor,
                    role: outcome.change.role.clone(),
                    previous_role: outcome.change.previous.clone(),
                    claimed_at: outcome.snapshot.updated_at,
                };
                publish_event(self.event_publisher.as_ref(), &event, &metadata).await;

                Ok(outcome)
            }
            Err(err) => {
                tracing::debug!(
                    session_id = %cmd.session_id,
                    actor = %cmd.actor,
                    role = %cmd.role,
                    code = %err.code(),
                    "Role claim rejected"
                );

                // A swap that lost its target still gave up the old role
                if let SessionError::RoleFull {
                    released: Some(released),
                    at,
                    ..
                } = &err
                {
                    let event = RoleReleased {
                        event_id: EventId::new(),
                        session_id: cmd.session_id.clone(),
                        actor_id: cmd.actor.clone(),
                        role: released.clone(),
                        released_at: *at,
                    };
                    publish_event(self.event_publisher.as_ref(), &event, &metadata).await;
                }

                Err(err)
            }
        }
    }
}
