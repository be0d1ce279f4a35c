//! GetSessionHandler - Query handler for one flight's current state.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{SessionError, SessionSnapshot};
use crate::ports::SessionRegistry;

#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

pub struct GetSessionHandler {
    registry: Arc<dyn SessionRegistry>,
}

impl GetSessionHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<SessionSnapshot, SessionError> {
        self.registry.get(&query.session_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::publish::test_support::*;
    use super::*;

    #[tokio::test]
    async fn returns_snapshot_or_not_found() {
        let registry = registry();
        open_flight(&registry, "m1").await;
        let handler = GetSessionHandler::new(registry);

        let snap = handler
            .handle(GetSessionQuery { session_id: sid("m1") })
            .await
            .unwrap();
        assert_eq!(snap.id, sid("m1"));

        let err = handler
            .handle(GetSessionQuery { session_id: sid("m2") })
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::NotFound(sid("m2")));
    }
}
