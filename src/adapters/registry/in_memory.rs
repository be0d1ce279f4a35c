//! In-memory session registry.
//!
//! # Locking
//!
//! Three kinds of lock, taken in this order and never nested across
//! sessions or across actors:
//!
//! 1. One `Mutex` per actor holds the id of the open session where the actor
//!    has a role. Claims and releases take it first, so an actor's
//!    assignments change one at a time and at most one open session holds
//!    the actor.
//! 2. `sessions` (`RwLock`) guards the id → session map. It is held only to
//!    insert, remove or clone out an `Arc` handle. Only the reaper waits on it
//!    while holding a session lock.
//! 3. Each session sits behind its own `Mutex`, so every operation on one
//!    session is a single critical section while other sessions proceed in
//!    parallel.
//!
//! A deleted session is removed from the map first and then marked
//! `Deleted`, so a caller that cloned the handle just before the delete sees
//! `NotModifiable` instead of mutating a session nobody can reach. Actor
//! entries pointing at closed or deleted sessions are cleared lazily.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};

use crate::domain::catalog::RoleCatalog;
use crate::domain::foundation::{ActorId, SessionId, SessionStatus, Timestamp};
use crate::domain::session::{Session, SessionError, SessionMetadata, SessionSnapshot};
use crate::ports::{ClaimOutcome, ReleaseOutcome, SessionRegistry};

type SessionHandle = Arc<Mutex<Session>>;

/// Session in which an actor holds a role, if any.
type ActorSlot = Arc<Mutex<Option<SessionId>>>;

#[derive(Clone)]
struct Entry {
    /// Creation sequence number; orders listings.
    seq: u64,
    session: SessionHandle,
}

/// Registry keeping every live session in process memory.
pub struct InMemorySessionRegistry {
    catalog: Arc<RoleCatalog>,
    sessions: RwLock<HashMap<SessionId, Entry>>,
    actors: Mutex<HashMap<ActorId, ActorSlot>>,
    next_seq: AtomicU64,
}

impl InMemorySessionRegistry {
    pub fn new(catalog: Arc<RoleCatalog>) -> Self {
        Self {
            catalog,
            sessions: RwLock::new(HashMap::new()),
            actors: Mutex::new(HashMap::new()),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Clones the handle for `id` out of the map.
    async fn handle(&self, id: &SessionId) -> Result<SessionHandle, SessionError> {
        self.sessions
            .read()
            .await
            .get(id)
            .map(|entry| Arc::clone(&entry.session))
            .ok_or_else(|| SessionError::NotFound(id.clone()))
    }

    /// Handles of all live sessions, oldest first.
    async fn ordered_handles(&self) -> Vec<(SessionId, SessionHandle)> {
        let mut entries: Vec<(u64, SessionId, SessionHandle)> = self
            .sessions
            .read()
            .await
            .iter()
            .map(|(id, entry)| (entry.seq, id.clone(), Arc::clone(&entry.session)))
            .collect();
        entries.sort_by_key(|(seq, _, _)| *seq);
        entries
            .into_iter()
            .map(|(_, id, handle)| (id, handle))
            .collect()
    }

    /// Removes `id` only if it still maps to `handle`.
    async fn remove_if_same(&self, id: &SessionId, handle: &SessionHandle) -> bool {
        let mut sessions = self.sessions.write().await;
        match sessions.get(id) {
            Some(entry) if Arc::ptr_eq(&entry.session, handle) => {
                sessions.remove(id);
                true
            }
            _ => false,
        }
    }

    async fn actor_slot(&self, actor: &ActorId) -> ActorSlot {
        Arc::clone(self.actors.lock().await.entry(actor.clone()).or_default())
    }

    /// Drops the actor's slot when it points nowhere and no other task uses it.
    ///
    /// New clones are only handed out under the `actors` lock, so a strong
    /// count of two (the map and `slot`) cannot grow while it is held.
    async fn forget_if_unassigned(&self, actor: &ActorId, slot: ActorSlot) {
        let mut actors = self.actors.lock().await;
        let unassigned = Arc::strong_count(&slot) == 2
            && slot.try_lock().map_or(false, |held| held.is_none());
        if unassigned {
            actors.remove(actor);
        }
    }

    /// Whether `actor` still holds a role in the open session `id`.
    async fn holds_open_role(&self, id: &SessionId, actor: &ActorId) -> bool {
        match self.handle(id).await {
            Ok(handle) => {
                let session = handle.lock().await;
                session.status().is_mutable() && session.holds_any_role(actor)
            }
            Err(_) => false,
        }
    }

    async fn claim_in(
        &self,
        held: &mut Option<SessionId>,
        id: &SessionId,
        actor: &ActorId,
        role: &str,
    ) -> Result<ClaimOutcome, SessionError> {
        if let Some(other) = held.clone().filter(|other| other != id) {
            if self.holds_open_role(&other, actor).await {
                return Err(SessionError::AssignedElsewhere {
                    actor: actor.clone(),
                    session: other,
                });
            }
            *held = None;
        }

        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;
        let result = session.claim_role(actor, role);
        *held = session.holds_any_role(actor).then(|| id.clone());

        let change = result?;
        Ok(ClaimOutcome {
            change,
            snapshot: session.snapshot(),
        })
    }

    async fn release_in(
        &self,
        id: &SessionId,
        actor: &ActorId,
    ) -> Result<ReleaseOutcome, SessionError> {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;
        let role = session.release_role(actor)?;
        Ok(ReleaseOutcome {
            role,
            snapshot: session.snapshot(),
        })
    }

    /// Sessions whose last change is older than `cutoff`, oldest first.
    async fn idle_candidates(&self, cutoff: &Timestamp) -> Vec<(SessionId, SessionHandle)> {
        let mut idle = Vec::new();
        for (id, handle) in self.ordered_handles().await {
            if handle.lock().await.is_idle_since(cutoff) {
                idle.push((id, handle));
            }
        }
        idle
    }

    /// Deletes a candidate if it is still idle, checking and removing under
    /// its session lock.
    async fn reap_if_idle(
        &self,
        id: &SessionId,
        handle: &SessionHandle,
        cutoff: &Timestamp,
    ) -> Option<SessionSnapshot> {
        let mut session = handle.lock().await;
        if !session.is_idle_since(cutoff) || !self.remove_if_same(id, handle).await {
            return None;
        }
        session.mark_deleted();
        Some(session.snapshot())
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    async fn create(
        &self,
        id: SessionId,
        metadata: SessionMetadata,
    ) -> Result<SessionSnapshot, SessionError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&id) {
            return Err(SessionError::AlreadyExists(id));
        }

        let session = Session::new(id.clone(), metadata, Arc::clone(&self.catalog));
        let snapshot = session.snapshot();
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        sessions.insert(
            id,
            Entry {
                seq,
                session: Arc::new(Mutex::new(session)),
            },
        );

        Ok(snapshot)
    }

    async fn get(&self, id: &SessionId) -> Result<SessionSnapshot, SessionError> {
        let handle = self.handle(id).await?;
        let session = handle.lock().await;
        if session.status() == SessionStatus::Deleted {
            return Err(SessionError::NotFound(id.clone()));
        }
        Ok(session.snapshot())
    }

    async fn list(&self) -> Vec<SessionSnapshot> {
        let mut snapshots = Vec::new();
        for (_, handle) in self.ordered_handles().await {
            let session = handle.lock().await;
            if session.status() != SessionStatus::Deleted {
                snapshots.push(session.snapshot());
            }
        }
        snapshots
    }

    async fn close(&self, id: &SessionId) -> Result<SessionSnapshot, SessionError> {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;
        session.close()?;
        Ok(session.snapshot())
    }

    async fn delete(&self, id: &SessionId) -> Result<SessionSnapshot, SessionError> {
        let entry = self
            .sessions
            .write()
            .await
            .remove(id)
            .ok_or_else(|| SessionError::NotFound(id.clone()))?;

        let mut session = entry.session.lock().await;
        session.mark_deleted();
        Ok(session.snapshot())
    }

    async fn claim_role(
        &self,
        id: &SessionId,
        actor: &ActorId,
        role: &str,
    ) -> Result<ClaimOutcome, SessionError> {
        let slot = self.actor_slot(actor).await;
        let result = {
            let mut held = slot.lock().await;
            self.claim_in(&mut held, id, actor, role).await
        };
        self.forget_if_unassigned(actor, slot).await;
        result
    }

    async fn release_role(
        &self,
        id: &SessionId,
        actor: &ActorId,
    ) -> Result<ReleaseOutcome, SessionError> {
        let slot = self.actor_slot(actor).await;
        let result = {
            let mut held = slot.lock().await;
            let result = self.release_in(id, actor).await;
            if result.is_ok() {
                *held = None;
            }
            result
        };
        self.forget_if_unassigned(actor, slot).await;
        result
    }

    async fn release_role_anywhere(&self, actor: &ActorId) -> Result<ReleaseOutcome, SessionError> {
        let slot = self.actor_slot(actor).await;
        let result = {
            let mut held = slot.lock().await;
            match held.take() {
                // Closed or vanished sessions hold nothing releasable.
                Some(id) => self
                    .release_in(&id, actor)
                    .await
                    .map_err(|_| SessionError::NotAssigned(actor.clone())),
                None => Err(SessionError::NotAssigned(actor.clone())),
            }
        };
        self.forget_if_unassigned(actor, slot).await;
        result
    }

    async fn reap_idle(&self, max_idle: Duration) -> Vec<SessionSnapshot> {
        let cutoff = Timestamp::now().minus(max_idle);

        let mut reaped = Vec::new();
        for (id, handle) in self.idle_candidates(&cutoff).await {
            if let Some(snapshot) = self.reap_if_idle(&id, &handle, &cutoff).await {
                reaped.push(snapshot);
            }
        }

        if !reaped.is_empty() {
            tracing::debug!(count = reaped.len(), "Reaped idle sessions");
        }
        reaped
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
