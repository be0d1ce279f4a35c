//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionRegistry` - Live flight sessions and their role assignments
//! - `AccessChecker` - Who may open flights
//! - `EventPublisher` / `EventSubscriber` - Domain event fan-out

mod access_checker;
mod event_publisher;
mod event_subscriber;
mod session_registry;

pub use access_checker::{AccessChecker, AccessDeniedReason, AccessResult};
pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
pub use session_registry::{ClaimOutcome, ReleaseOutcome, SessionRegistry};
