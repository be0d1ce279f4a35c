//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, status, timestamps, events, errors)
//! - `catalog` - Role kinds and their capacities
//! - `session` - Flight session aggregate, snapshots and events

pub mod catalog;
pub mod foundation;
pub mod session;
