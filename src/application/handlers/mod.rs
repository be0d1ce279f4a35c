//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod session;

pub use session::{
    ClaimRoleCommand, ClaimRoleHandler, CloseSessionCommand, CloseSessionHandler,
    CreateSessionCommand, CreateSessionHandler, CreateSessionResult, DeleteSessionCommand,
    DeleteSessionHandler, GetSessionHandler, GetSessionQuery, IdleReaper, ListSessionsHandler,
    ListSessionsQuery, ReleaseRoleCommand, ReleaseRoleHandler, ReleaseScope,
};
