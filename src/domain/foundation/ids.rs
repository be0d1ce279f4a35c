//! Strongly-typed identifier value objects.
//!
//! All identifiers in this domain are supplied from outside: the transport
//! hands us its message reference as a `SessionId` and its user reference as
//! an `ActorId`. Role keys come from the catalog configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Opaque identifier for a live session (e.g. the rendered message reference).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new SessionId, returning error if empty or blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("session_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SessionId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

/// Identity of an actor (a platform user) issuing claim/release requests.
///
/// Authentication happens upstream; the core only compares these for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActorId(String);

impl ActorId {
    /// Creates a new ActorId, returning error if empty or blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("actor_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ActorId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ActorId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ActorId> for String {
    fn from(id: ActorId) -> Self {
        id.0
    }
}

/// Stable key of a role kind in the catalog (e.g. `pilot`).
///
/// Keys are lowercase ASCII letters, digits, `_` or `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoleKey(String);

impl RoleKey {
    /// Creates a new RoleKey, validating its character set.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ValidationError::empty_field("role_key"));
        }
        let valid = key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
        if !valid {
            return Err(ValidationError::invalid_format(
                "role_key",
                format!("'{}' must be lowercase ascii, digits, '_' or '-'", key),
            ));
        }
        Ok(Self(key))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RoleKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RoleKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoleKey> for String {
    fn from(key: RoleKey) -> Self {
        key.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_rejects_blank() {
        assert!(SessionId::new("").is_err());
        assert!(SessionId::new("   ").is_err());
    }

    #[test]
    fn session_id_keeps_opaque_value() {
        let id = SessionId::new("1385932180005458011").unwrap();
        assert_eq!(id.as_str(), "1385932180005458011");
        assert_eq!(id.to_string(), "1385932180005458011");
    }

    #[test]
    fn actor_id_rejects_empty() {
        assert!(ActorId::new("").is_err());
    }

    #[test]
    fn actor_id_parses_from_str() {
        let actor: ActorId = "alice".parse().unwrap();
        assert_eq!(actor.as_str(), "alice");
    }

    #[test]
    fn role_key_accepts_lowercase_and_separators() {
        assert!(RoleKey::new("pilot").is_ok());
        assert!(RoleKey::new("ground_crew").is_ok());
        assert!(RoleKey::new("co-pilot2").is_ok());
    }

    #[test]
    fn role_key_rejects_uppercase_and_spaces() {
        assert!(RoleKey::new("Pilot").is_err());
        assert!(RoleKey::new("co pilot").is_err());
        assert!(RoleKey::new("").is_err());
    }

    #[test]
    fn ids_serialize_transparently() {
        let key = RoleKey::new("pilot").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), r#""pilot""#);

        let actor: ActorId = serde_json::from_str(r#""bob""#).unwrap();
        assert_eq!(actor.as_str(), "bob");
    }

    #[test]
    fn deserializing_blank_id_fails() {
        let result: Result<SessionId, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err());
    }
}
