//! Property tests for roster invariants through the registry port.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use flight_roster::adapters::InMemorySessionRegistry;
use flight_roster::domain::catalog::RoleCatalog;
use flight_roster::domain::foundation::{ActorId, SessionId};
use flight_roster::domain::session::{SessionError, SessionMetadata, SessionSnapshot};
use flight_roster::ports::SessionRegistry;

#[derive(Debug, Clone)]
enum Op {
    Claim { session: u8, actor: u8, role: usize },
    Release { session: u8, actor: u8 },
    ReleaseAnywhere { actor: u8 },
    Close { session: u8 },
}

const ROLES: [&str; 7] = [
    "pilot",
    "copilot",
    "dispatcher",
    "ground",
    "steward",
    "passenger",
    "stowaway",
];

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0u8..3, 0u8..10, 0usize..ROLES.len())
            .prop_map(|(session, actor, role)| Op::Claim { session, actor, role }),
        2 => (0u8..3, 0u8..10).prop_map(|(session, actor)| Op::Release { session, actor }),
        1 => (0u8..10).prop_map(|actor| Op::ReleaseAnywhere { actor }),
        1 => (0u8..3).prop_map(|session| Op::Close { session }),
    ]
}

fn sid(n: u8) -> SessionId {
    SessionId::new(format!("S{n}")).unwrap()
}

fn actor(n: u8) -> ActorId {
    ActorId::new(format!("a{n}")).unwrap()
}

fn assert_roster_invariants(snapshot: &SessionSnapshot) {
    let mut seen = HashSet::new();
    for roster in &snapshot.roles {
        if let Some(limit) = roster.capacity.limit() {
            assert!(roster.members.len() <= limit as usize);
        }
        for member in &roster.members {
            assert!(seen.insert(member.clone()), "{member} listed twice");
            assert_eq!(snapshot.role_of(member), Some(&roster.key));
        }
    }
}

fn run(ops: Vec<Op>) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    runtime.block_on(async {
        let reg = Arc::new(InMemorySessionRegistry::new(Arc::new(
            RoleCatalog::flight_crew(),
        )));
        for s in 0..3 {
            reg.create(sid(s), SessionMetadata::new()).await.unwrap();
        }

        for op in ops {
            match op {
                Op::Claim { session, actor: a, role } => {
                    let before = reg.get(&sid(session)).await.unwrap();
                    match reg.claim_role(&sid(session), &actor(a), ROLES[role]).await {
                        Ok(outcome) => {
                            assert_eq!(outcome.snapshot.role_of(&actor(a)), Some(&outcome.change.role));
                            assert_eq!(outcome.change.previous.as_ref(), before.role_of(&actor(a)));
                        }
                        Err(SessionError::UnknownRole(_))
                        | Err(SessionError::AlreadyHoldingRole(_))
                        | Err(SessionError::NotModifiable { .. })
                        | Err(SessionError::AssignedElsewhere { .. }) => {
                            assert_eq!(reg.get(&sid(session)).await.unwrap().roles, before.roles);
                        }
                        Err(SessionError::RoleFull { released, .. }) => {
                            let after = reg.get(&sid(session)).await.unwrap();
                            assert_eq!(after.role_of(&actor(a)), None);
                            assert_eq!(released.as_ref(), before.role_of(&actor(a)));
                        }
                        Err(other) => panic!("unexpected: {other}"),
                    }
                }
                Op::Release { session, actor: a } => {
                    let _ = reg.release_role(&sid(session), &actor(a)).await;
                    let after = reg.get(&sid(session)).await.unwrap();
                    if after.status.is_mutable() {
                        assert_eq!(after.role_of(&actor(a)), None);
                    }
                }
                Op::ReleaseAnywhere { actor: a } => {
                    let _ = reg.release_role_anywhere(&actor(a)).await;
                }
                Op::Close { session } => {
                    let _ = reg.close(&sid(session)).await;
                }
            }

            let mut open_holders = HashSet::new();
            for snapshot in reg.list().await {
                assert_roster_invariants(&snapshot);
                if snapshot.status.is_mutable() {
                    for roster in &snapshot.roles {
                        for member in &roster.members {
                            assert!(
                                open_holders.insert(member.clone()),
                                "{member} holds roles in two open flights"
                            );
                        }
                    }
                }
            }
        }
    });
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn roster_invariants_hold_for_any_sequence(ops in prop::collection::vec(op(), 1..60)) {
        run(ops);
    }
}
