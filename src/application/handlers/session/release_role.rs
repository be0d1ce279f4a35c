//! ReleaseRoleHandler - Command handler for leaving a role.

use std::sync::Arc;

use crate::domain::foundation::{ActorId, CommandMetadata, EventId, SessionId};
use crate::domain::session::{RoleReleased, SessionError};
use crate::ports::{EventPublisher, ReleaseOutcome, SessionRegistry};

use super::publish::publish_event;

/// Where to look for the actor's role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseScope {
    /// Only this flight.
    Session(SessionId),
    /// The one open flight in which the actor holds a role.
    Anywhere,
}

/// Command to release a role.
#[derive(Debug, Clone)]
pub struct ReleaseRoleCommand {
    pub actor: ActorId,
    pub scope: ReleaseScope,
}

pub struct ReleaseRoleHandler {
    registry: Arc<dyn SessionRegistry>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ReleaseRoleHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            registry,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: ReleaseRoleCommand,
        metadata: CommandMetadata,
    ) -> Result<ReleaseOutcome, SessionError> {
        let result = match &cmd.scope {
            ReleaseScope::Session(id) => self.registry.release_role(id, &cmd.actor).await,
            ReleaseScope::Anywhere => self.registry.release_role_anywhere(&cmd.actor).await,
        };

        let outcome = result.map_err(|err| {
            tracing::debug!(actor = %cmd.actor, scope = ?cmd.scope, code = %err.code(), "Role release rejected");
            err
        })?;

        tracing::info!(
            session_id = %outcome.snapshot.id,
            actor = %cmd.actor,
            role = %outcome.role,
            "Role released"
        );

        let event = RoleReleased {
            event_id: EventId::new(),
            session_id: outcome.snapshot.id.clone(),
            actor_id: cmd.actor,
            role: outcome.role.clone(),
            released_at: outcome.snapshot.updated_at,
        };
        publish_event(self.event_publisher.as_ref(), &event, &metadata).await;

        Ok(outcome)
    }
}
