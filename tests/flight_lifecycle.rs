//! Integration tests for a flight's life from creation to deletion.
//!
//! Drives the application handlers over the in-memory registry and event bus
//! and checks both the resulting state and the events published.

use std::sync::Arc;

use flight_roster::adapters::{AllowListAccessChecker, InMemoryEventBus, InMemorySessionRegistry};
use flight_roster::application::{
    ClaimRoleCommand, ClaimRoleHandler, CloseSessionCommand, CloseSessionHandler,
    CreateSessionCommand, CreateSessionHandler, DeleteSessionCommand, DeleteSessionHandler,
    GetSessionHandler, GetSessionQuery, ReleaseRoleCommand, ReleaseRoleHandler, ReleaseScope,
};
use flight_roster::domain::catalog::{Capacity, RoleCatalog, RoleKind};
use flight_roster::domain::foundation::{ActorId, CommandMetadata, RoleKey, SessionId, SessionStatus};
use flight_roster::domain::session::{metadata_keys, SessionError, SessionMetadata};
use flight_roster::ports::SessionRegistry;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Fixture {
    registry: Arc<InMemorySessionRegistry>,
    bus: Arc<InMemoryEventBus>,
    create: CreateSessionHandler,
    claim: ClaimRoleHandler,
    release: ReleaseRoleHandler,
    close: CloseSessionHandler,
    delete: DeleteSessionHandler,
    get: GetSessionHandler,
}

impl Fixture {
    fn new(catalog: RoleCatalog) -> Self {
        let registry = Arc::new(InMemorySessionRegistry::new(Arc::new(catalog)));
        let bus = Arc::new(InMemoryEventBus::new());
        Self {
            create: CreateSessionHandler::new(
                registry.clone(),
                Arc::new(AllowListAccessChecker::new(["alice"])),
                bus.clone(),
            ),
            claim: ClaimRoleHandler::new(registry.clone(), bus.clone()),
            release: ReleaseRoleHandler::new(registry.clone(), bus.clone()),
            close: CloseSessionHandler::new(registry.clone(), bus.clone()),
            delete: DeleteSessionHandler::new(registry.clone(), bus.clone()),
            get: GetSessionHandler::new(registry.clone()),
            registry,
            bus,
        }
    }

    async fn claim(&self, session: &str, actor: &str, role: &str) -> Result<(), SessionError> {
        let cmd = ClaimRoleCommand {
            session_id: sid(session),
            actor: actor_id(actor),
            role: role.to_string(),
        };
        self.claim.handle(cmd, meta(actor)).await.map(|_| ())
    }

    async fn members(&self, session: &str, role: &str) -> Vec<String> {
        let snapshot = self
            .get
            .handle(GetSessionQuery {
                session_id: sid(session),
            })
            .await
            .unwrap();
        snapshot
            .role(role)
            .unwrap()
            .members
            .iter()
            .map(|a| a.to_string())
            .collect()
    }
}

fn pilot_and_passenger() -> RoleCatalog {
    RoleCatalog::new(vec![
        RoleKind::new(RoleKey::new("pilot").unwrap(), "Pilot", Capacity::limited(1).unwrap()),
        RoleKind::new(RoleKey::new("passenger").unwrap(), "Passenger", Capacity::Unbounded),
    ])
    .unwrap()
}

fn sid(s: &str) -> SessionId {
    SessionId::new(s).unwrap()
}

fn actor_id(s: &str) -> ActorId {
    ActorId::new(s).unwrap()
}

fn meta(actor: &str) -> CommandMetadata {
    CommandMetadata::new(actor_id(actor)).with_correlation_id("it-corr")
}

async fn create(fx: &Fixture, session: &str, creator: &str) -> Result<(), SessionError> {
    let cmd = CreateSessionCommand {
        session_id: sid(session),
        creator: actor_id(creator),
        metadata: SessionMetadata::new()
            .with(metadata_keys::DEPARTURE, "LED")
            .with(metadata_keys::ARRIVAL, "SVO"),
    };
    fx.create.handle(cmd, meta(creator)).await.map(|_| ())
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn pilot_swap_release_and_delete() {
    let fx = Fixture::new(pilot_and_passenger());
    create(&fx, "S", "alice").await.unwrap();

    fx.claim("S", "alice", "pilot").await.unwrap();
    assert_eq!(fx.members("S", "pilot").await, vec!["alice"]);

    let err = fx.claim("S", "bob", "pilot").await.unwrap_err();
    assert!(matches!(err, SessionError::RoleFull { released: None, .. }));
    assert_eq!(fx.members("S", "pilot").await, vec!["alice"]);

    fx.claim("S", "alice", "passenger").await.unwrap();
    assert!(fx.members("S", "pilot").await.is_empty());
    assert_eq!(fx.members("S", "passenger").await, vec!["alice"]);

    let released = fx
        .release
        .handle(
            ReleaseRoleCommand {
                actor: actor_id("alice"),
                scope: ReleaseScope::Session(sid("S")),
            },
            meta("alice"),
        )
        .await
        .unwrap();
    assert_eq!(released.role.as_str(), "passenger");
    assert!(fx.members("S", "passenger").await.is_empty());

    fx.delete
        .handle(DeleteSessionCommand { session_id: sid("S") }, meta("alice"))
        .await
        .unwrap();
    let err = fx
        .get
        .handle(GetSessionQuery { session_id: sid("S") })
        .await
        .unwrap_err();
    assert_eq!(err, SessionError::NotFound(sid("S")));
}

#[tokio::test]
async fn events_follow_the_mutations_in_order() {
    let fx = Fixture::new(pilot_and_passenger());
    create(&fx, "S", "alice").await.unwrap();
    fx.claim("S", "alice", "pilot").await.unwrap();
    fx.claim("S", "alice", "passenger").await.unwrap();
    fx.close
        .handle(CloseSessionCommand { session_id: sid("S") }, meta("alice"))
        .await
        .unwrap();
    fx.delete
        .handle(DeleteSessionCommand { session_id: sid("S") }, meta("alice"))
        .await
        .unwrap();

    let types: Vec<String> = fx
        .bus
        .events_for_aggregate("S")
        .into_iter()
        .map(|e| e.event_type)
        .collect();
    assert_eq!(
        types,
        vec![
            "flight.created",
            "flight.role_claimed",
            "flight.role_claimed",
            "flight.closed",
            "flight.deleted",
        ]
    );

    let swap = &fx.bus.events_of_type("flight.role_claimed")[1];
    assert_eq!(swap.payload["role"], "passenger");
    assert_eq!(swap.payload["previous_role"], "pilot");
    assert_eq!(swap.metadata.correlation_id.as_deref(), Some("it-corr"));

    let deleted = &fx.bus.events_of_type("flight.deleted")[0];
    assert_eq!(deleted.payload["reason"], "requested");
    assert_eq!(deleted.payload["assigned_count"], 1);
}

#[tokio::test]
async fn closed_flight_keeps_roster_but_rejects_changes() {
    let fx = Fixture::new(pilot_and_passenger());
    create(&fx, "S", "alice").await.unwrap();
    fx.claim("S", "alice", "pilot").await.unwrap();

    let closed = fx
        .close
        .handle(CloseSessionCommand { session_id: sid("S") }, meta("alice"))
        .await
        .unwrap();
    assert_eq!(closed.status, SessionStatus::Closed);

    let err = fx.claim("S", "bob", "passenger").await.unwrap_err();
    assert!(matches!(err, SessionError::NotModifiable { .. }));

    let err = fx
        .close
        .handle(CloseSessionCommand { session_id: sid("S") }, meta("alice"))
        .await
        .unwrap_err();
    assert_eq!(err, SessionError::AlreadyClosed(sid("S")));

    assert_eq!(fx.members("S", "pilot").await, vec!["alice"]);
}

#[tokio::test]
async fn only_allowed_creators_open_flights() {
    let fx = Fixture::new(pilot_and_passenger());

    let err = create(&fx, "S", "mallory").await.unwrap_err();
    assert!(matches!(err, SessionError::AccessDenied(_)));
    assert_eq!(fx.registry.len().await, 0);
    assert_eq!(fx.bus.event_count(), 0);

    create(&fx, "S", "alice").await.unwrap();
    let err = create(&fx, "S", "alice").await.unwrap_err();
    assert_eq!(err, SessionError::AlreadyExists(sid("S")));
}

#[tokio::test]
async fn created_flight_gets_a_four_digit_number() {
    let fx = Fixture::new(pilot_and_passenger());
    create(&fx, "S", "alice").await.unwrap();

    let snapshot = fx
        .get
        .handle(GetSessionQuery { session_id: sid("S") })
        .await
        .unwrap();
    let number: u16 = snapshot
        .metadata
        .get(metadata_keys::FLIGHT_NUMBER)
        .unwrap()
        .parse()
        .unwrap();
    assert!((1000..=9999).contains(&number));
    assert_eq!(snapshot.metadata.get(metadata_keys::DEPARTURE), Some("LED"));
}

#[tokio::test]
async fn release_anywhere_finds_the_actors_flight() {
    let fx = Fixture::new(pilot_and_passenger());
    create(&fx, "S1", "alice").await.unwrap();
    create(&fx, "S2", "alice").await.unwrap();
    fx.claim("S2", "bob", "passenger").await.unwrap();

    let outcome = fx
        .release
        .handle(
            ReleaseRoleCommand {
                actor: actor_id("bob"),
                scope: ReleaseScope::Anywhere,
            },
            meta("bob"),
        )
        .await
        .unwrap();
    assert_eq!(outcome.snapshot.id, sid("S2"));

    let err = fx
        .release
        .handle(
            ReleaseRoleCommand {
                actor: actor_id("bob"),
                scope: ReleaseScope::Anywhere,
            },
            meta("bob"),
        )
        .await
        .unwrap_err();
    assert_eq!(err, SessionError::NotAssigned(actor_id("bob")));
}
