//! HTTP middleware for axum.
//!
//! - `actor` - Extractor for the caller identity forwarded by the gateway

pub mod actor;

pub use actor::{ActorRejection, RequireActor, ACTOR_HEADER};
