//! Event bus adapters.
//!
//! - `InMemoryEventBus` - In-process bus with bounded history
//! - `AuditLogHandler` - Subscriber that logs every flight event

mod audit_log;
mod in_memory;

pub use audit_log::{AuditLogHandler, FLIGHT_EVENT_TYPES};
pub use in_memory::{InMemoryEventBus, DEFAULT_HISTORY};
