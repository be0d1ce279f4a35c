//! Free-form descriptive fields carried by a session.
//!
//! The core never interprets these; it only keeps them in insertion order so
//! that a renderer shows them the way the creator supplied them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Conventional field names used by the flight card and the create handler.
pub mod keys {
    pub const FLIGHT_NUMBER: &str = "flight_number";
    pub const DEPARTURE: &str = "departure";
    pub const ARRIVAL: &str = "arrival";
    pub const TRANSFER: &str = "transfer";
    pub const ALTERNATE: &str = "alternate";
    pub const TIME: &str = "time";
    pub const GATE: &str = "gate";
}

/// Ordered key/value metadata (route, time, gate, ...).
///
/// Serializes as a map whose entry order is the insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionMetadata(IndexMap<String, String>);

impl SessionMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a field. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SessionMetadata {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
