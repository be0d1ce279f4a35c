//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate through the registry and publish events; query
//! handlers only read snapshots.

pub mod handlers;

pub use handlers::{
    ClaimRoleCommand, ClaimRoleHandler, CloseSessionCommand, CloseSessionHandler,
    CreateSessionCommand, CreateSessionHandler, CreateSessionResult, DeleteSessionCommand,
    DeleteSessionHandler, GetSessionHandler, GetSessionQuery, IdleReaper, ListSessionsHandler,
    ListSessionsQuery, ReleaseRoleCommand, ReleaseRoleHandler, ReleaseScope,
};
