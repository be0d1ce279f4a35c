//! Role catalog domain module.
//!
//! The catalog is process-wide configuration: the fixed, ordered set of
//! role kinds (label, optional emoji, optional capacity) that every session
//! exposes. It is read-only once built.

mod role_catalog;
mod errors;
mod role_kind;

pub use role_catalog::RoleCatalog;
pub use errors::CatalogError;
pub use role_kind::{Capacity, RoleKind};
