//! RoleKind value object - one slot category a session offers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

use crate::domain::foundation::RoleKey;

/// How many actors may hold a role at once.
///
/// Serialized as an optional integer (`null` = unbounded), which is also the
/// shape the YAML catalog file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<NonZeroU32>", into = "Option<NonZeroU32>")]
pub enum Capacity {
    Limited(NonZeroU32),
    Unbounded,
}

impl Capacity {
    /// Creates a limited capacity, or `None` for zero.
    pub fn limited(max: u32) -> Option<Self> {
        NonZeroU32::new(max).map(Capacity::Limited)
    }

    /// Returns the limit, if any.
    pub fn limit(&self) -> Option<u32> {
        match self {
            Capacity::Limited(max) => Some(max.get()),
            Capacity::Unbounded => None,
        }
    }

    /// Returns true if `current` holders leave no room for one more.
    pub fn is_exhausted_by(&self, current: usize) -> bool {
        match self {
            Capacity::Limited(max) => current >= max.get() as usize,
            Capacity::Unbounded => false,
        }
    }

    /// Remaining free slots given `current` holders; `None` when unbounded.
    pub fn remaining(&self, current: usize) -> Option<u32> {
        self.limit()
            .map(|max| max.saturating_sub(u32::try_from(current).unwrap_or(u32::MAX)))
    }
}

impl From<Option<NonZeroU32>> for Capacity {
    fn from(value: Option<NonZeroU32>) -> Self {
        value.map(Capacity::Limited).unwrap_or(Capacity::Unbounded)
    }
}

impl From<Capacity> for Option<NonZeroU32> {
    fn from(value: Capacity) -> Self {
        match value {
            Capacity::Limited(max) => Some(max),
            Capacity::Unbounded => None,
        }
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Limited(max) => write!(f, "{}", max),
            Capacity::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// A named, capacity-bounded category an actor can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleKind {
    key: RoleKey,
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    emoji: Option<String>,
    capacity: Capacity,
}

impl RoleKind {
    pub fn new(key: RoleKey, label: impl Into<String>, capacity: Capacity) -> Self {
        Self {
            key,
            label: label.into(),
            emoji: None,
            capacity,
        }
    }

    /// Builder: attach a display emoji.
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    pub fn key(&self) -> &RoleKey {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn emoji(&self) -> Option<&str> {
        self.emoji.as_deref()
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }
}
