//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the flight roster domain.

mod command;
mod errors;
mod events;
mod ids;
mod session_status;
mod state_machine;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use crate::domain_event;
pub use events::{DomainEvent, EventEnvelope, EventId, EventMetadata, SESSION_AGGREGATE};
pub use ids::{ActorId, RoleKey, SessionId};
pub use session_status::SessionStatus;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
