//! Catalog-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, RoleKey, ValidationError};

/// Errors raised while building or querying the role catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Role '{0}' is declared more than once")]
    DuplicateRole(RoleKey),

    #[error("Role '{0}' must have a positive capacity or none")]
    InvalidCapacity(RoleKey),

    #[error("Catalog declares no roles")]
    Empty,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Catalog could not be read: {0}")]
    Unreadable(String),
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::UnknownRole(_) => ErrorCode::UnknownRole,
            CatalogError::DuplicateRole(_) => ErrorCode::DuplicateRole,
            CatalogError::InvalidCapacity(_) => ErrorCode::InvalidCapacity,
            CatalogError::Empty | CatalogError::Validation(_) => ErrorCode::ValidationFailed,
            CatalogError::Unreadable(_) => ErrorCode::CatalogUnreadable,
        }
    }
}
