//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `registry` - In-process session registry
//! - `access` - Allow-list creation permissions
//! - `events` - In-memory event bus and the audit log subscriber
//! - `render` - Plain-text flight cards
//! - `http` - REST API (axum)

pub mod access;
pub mod events;
pub mod http;
pub mod registry;
pub mod render;

pub use access::AllowListAccessChecker;
pub use events::{AuditLogHandler, InMemoryEventBus, FLIGHT_EVENT_TYPES};
pub use registry::InMemorySessionRegistry;
pub use render::FlightCardRenderer;
