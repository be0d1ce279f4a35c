//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Stable, machine-readable error codes.
///
/// Adapters key their user-facing messages off these, never off `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Catalog errors
    UnknownRole,
    DuplicateRole,
    InvalidCapacity,
    CatalogUnreadable,

    // Registry errors
    SessionNotFound,
    SessionAlreadyExists,

    // Assignment errors
    RoleFull,
    AlreadyHoldingRole,
    AssignedElsewhere,
    NotAssigned,

    // State errors
    SessionNotModifiable,
    AlreadyClosed,

    // Authorization errors
    Forbidden,

    // Infrastructure errors
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::UnknownRole => "UNKNOWN_ROLE",
            ErrorCode::DuplicateRole => "DUPLICATE_ROLE",
            ErrorCode::InvalidCapacity => "INVALID_CAPACITY",
            ErrorCode::CatalogUnreadable => "CATALOG_UNREADABLE",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::SessionAlreadyExists => "SESSION_ALREADY_EXISTS",
            ErrorCode::RoleFull => "ROLE_FULL",
            ErrorCode::AlreadyHoldingRole => "ALREADY_HOLDING_ROLE",
            ErrorCode::AssignedElsewhere => "ASSIGNED_ELSEWHERE",
            ErrorCode::NotAssigned => "NOT_ASSIGNED",
            ErrorCode::SessionNotModifiable => "SESSION_NOT_MODIFIABLE",
            ErrorCode::AlreadyClosed => "ALREADY_CLOSED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// General error raised by infrastructure ports (event bus, access checks).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Shorthand for an `InternalError`.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl StdError for DomainError {}
