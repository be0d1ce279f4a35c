//! IdleReaper - Background service that deletes abandoned flights.
//!
//! # Configuration
//!
//! | Setting | Meaning |
//! |---------|---------|
//! | `max_idle` | A flight unchanged for longer than this is deleted |
//! | `interval` | How often the registry is scanned |
//!
//! The service stops when the shutdown watch flips to `true`.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time;

use crate::domain::foundation::CommandMetadata;
use crate::domain::session::DeletionReason;
use crate::ports::{EventPublisher, SessionRegistry};

use super::delete_session::deleted_event;
use super::publish::publish_event;

pub struct IdleReaper {
    registry: Arc<dyn SessionRegistry>,
    event_publisher: Arc<dyn EventPublisher>,
    max_idle: Duration,
    interval: Duration,
}

impl IdleReaper {
    pub fn new(
        registry: Arc<dyn SessionRegistry>,
        event_publisher: Arc<dyn EventPublisher>,
        max_idle: Duration,
        interval: Duration,
    ) -> Self {
        Self {
            registry,
            event_publisher,
            max_idle,
            interval,
        }
    }

    /// Runs the reaper loop until shutdown is signalled.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.interval);
        interval.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        tracing::info!("Idle reaper stopping");
                        return;
                    }
                }
                _ = interval.tick() => {
                    self.reap_once().await;
                }
            }
        }
    }

    /// One scan. Returns how many flights were deleted.
    pub async fn reap_once(&self) -> usize {
        let reaped = self.registry.reap_idle(self.max_idle).await;
        if reaped.is_empty() {
            return 0;
        }

        let metadata = CommandMetadata::system("idle-reaper");
        for snapshot in &reaped {
            tracing::info!(
                session_id = %snapshot.id,
                idle_secs = self.max_idle.as_secs(),
                "Idle flight expired"
            );
            let event = deleted_event(snapshot, DeletionReason::Idle);
            publish_event(self.event_publisher.as_ref(), &event, &metadata).await;
        }
        reaped.len()
    }
}
