//! Session command and query handlers.

mod claim_role;
mod close_session;
mod create_session;
mod delete_session;
mod get_session;
mod idle_reaper;
mod list_sessions;
mod publish;
mod release_role;

pub use claim_role::{ClaimRoleCommand, ClaimRoleHandler};
pub use close_session::{CloseSessionCommand, CloseSessionHandler};
pub use create_session::{CreateSessionCommand, CreateSessionHandler, CreateSessionResult};
pub use delete_session::{DeleteSessionCommand, DeleteSessionHandler};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use idle_reaper::IdleReaper;
pub use list_sessions::{ListSessionsHandler, ListSessionsQuery};
pub use release_role::{ReleaseRoleCommand, ReleaseRoleHandler, ReleaseScope};
