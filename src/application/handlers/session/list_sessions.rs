//! ListSessionsHandler - Query handler for active flights and the catalog.

use std::sync::Arc;

use crate::domain::catalog::RoleKind;
use crate::domain::foundation::SessionStatus;
use crate::domain::session::SessionSnapshot;
use crate::ports::SessionRegistry;

/// Query for the flight listing.
#[derive(Debug, Clone, Default)]
pub struct ListSessionsQuery {
    /// Only flights in this status, when set.
    pub status: Option<SessionStatus>,
}

pub struct ListSessionsHandler {
    registry: Arc<dyn SessionRegistry>,
}

impl ListSessionsHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Live flights, oldest first.
    pub async fn handle(&self, query: ListSessionsQuery) -> Vec<SessionSnapshot> {
        let mut sessions = self.registry.list().await;
        if let Some(status) = query.status {
            sessions.retain(|s| s.status == status);
        }
        sessions
    }

    /// Role kinds every flight offers, in display order.
    pub fn catalog(&self) -> Vec<RoleKind> {
        self.registry.catalog().all_kinds().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::super::publish::test_support::*;
    use super::*;

    #[tokio::test]
    async fn lists_in_creation_order_with_status_filter() {
        let registry = registry();
        for id in ["m3", "m1", "m2"] {
            open_flight(&registry, id).await;
        }
        registry.close(&sid("m1")).await.unwrap();
        let handler = ListSessionsHandler::new(registry);

        let all: Vec<String> = handler
            .handle(ListSessionsQuery::default())
            .await
            .iter()
            .map(|s| s.id.to_string())
            .collect();
        assert_eq!(all, vec!["m3", "m1", "m2"]);

        let open = handler
            .handle(ListSessionsQuery {
                status: Some(SessionStatus::Open),
            })
            .await;
        assert_eq!(open.len(), 2);
    }

    #[test]
    fn catalog_is_in_display_order() {
        let handler = ListSessionsHandler::new(registry());
        let keys: Vec<String> = handler
            .catalog()
            .iter()
            .map(|k| k.key().to_string())
            .collect();
        assert_eq!(keys.first().map(String::as_str), Some("pilot"));
        assert_eq!(keys.last().map(String::as_str), Some("passenger"));
    }
}
