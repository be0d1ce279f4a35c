//! Session domain module.
//!
//! A session is one flight: its metadata, its lifecycle status and the
//! current holder of every catalog role.
//!
//! # Events
//!
//! - `SessionCreated` - Published when a flight is opened
//! - `RoleClaimed` - Published when an actor takes (or swaps into) a role
//! - `RoleReleased` - Published when an actor leaves a role
//! - `SessionClosed` - Published when the roster is frozen
//! - `SessionDeleted` - Published when a flight is removed

mod aggregate;
mod errors;
mod events;
mod metadata;
mod snapshot;

pub use aggregate::{RoleChange, Session};
pub use errors::SessionError;
pub use events::{
    DeletionReason, RoleClaimed, RoleReleased, SessionClosed, SessionCreated, SessionDeleted,
};
pub use metadata::{keys as metadata_keys, SessionMetadata};
pub use snapshot::{RoleRoster, SessionSnapshot};
