//! RoleCatalog - the immutable, ordered set of role kinds every session offers.
//!
//! # Ordering
//!
//! Declaration order is significant: it is the order roles are shown on a
//! flight card and the order claim buttons are offered. `all_kinds()` always
//! returns kinds in that order.
//!
//! # Sources
//!
//! - [`RoleCatalog::new`] from already-built kinds
//! - [`RoleCatalog::from_yaml_str`] / [`RoleCatalog::from_yaml_file`]
//! - [`RoleCatalog::flight_crew`], the built-in crew layout

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::domain::foundation::RoleKey;

use super::{Capacity, CatalogError, RoleKind};

/// The built-in crew layout.
static FLIGHT_CREW: Lazy<RoleCatalog> = Lazy::new(|| {
    let entries = [
        ("pilot", "Pilot", "✈️", Some(1)),
        ("copilot", "Co-pilot", "✈️", Some(1)),
        ("dispatcher", "Dispatcher", "🎧", Some(2)),
        ("ground", "Ground crew", "🚨", Some(5)),
        ("steward", "Steward", "🚻", Some(3)),
        ("passenger", "Passenger", "🧳", None),
    ];
    let kinds = entries
        .into_iter()
        .map(|(key, label, emoji, limit)| RoleKindEntry {
            key: key.to_string(),
            label: label.to_string(),
            emoji: Some(emoji.to_string()),
            limit,
        })
        .collect();
    CatalogFile { roles: kinds }
        .into_catalog()
        .unwrap_or_else(|e| unreachable!("built-in catalog is valid: {e}"))
});

/// Immutable, ordered catalog of role kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCatalog {
    kinds: Vec<RoleKind>,
    index: HashMap<RoleKey, usize>,
}

impl RoleCatalog {
    /// Builds a catalog from kinds in display order.
    ///
    /// # Errors
    ///
    /// - `Empty` if no kinds are given
    /// - `DuplicateRole` if two kinds share a key
    pub fn new(kinds: Vec<RoleKind>) -> Result<Self, CatalogError> {
        if kinds.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(kinds.len());
        for (position, kind) in kinds.iter().enumerate() {
            if index.insert(kind.key().clone(), position).is_some() {
                return Err(CatalogError::DuplicateRole(kind.key().clone()));
            }
        }

        Ok(Self { kinds, index })
    }

    /// The built-in crew catalog: pilot (1), copilot (1), dispatcher (2),
    /// ground (5), steward (3), passenger (unbounded).
    pub fn flight_crew() -> Self {
        FLIGHT_CREW.clone()
    }

    /// Parses a catalog from a YAML document.
    ///
    /// ```yaml
    /// roles:
    ///   - key: pilot
    ///     label: Pilot
    ///     emoji: "✈️"
    ///     limit: 1
    ///   - key: passenger
    ///     label: Passenger
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Unreadable(e.to_string()))?;
        file.into_catalog()
    }

    /// Reads and parses a YAML catalog file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Unreadable(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&yaml)
    }

    /// Looks up a role kind by key.
    ///
    /// # Errors
    ///
    /// - `UnknownRole` if the key is not declared
    pub fn kind(&self, key: &RoleKey) -> Result<&RoleKind, CatalogError> {
        self.index
            .get(key)
            .map(|&position| &self.kinds[position])
            .ok_or_else(|| CatalogError::UnknownRole(key.to_string()))
    }

    /// Looks up a role kind by its raw string key.
    pub fn kind_by_str(&self, key: &str) -> Result<&RoleKind, CatalogError> {
        let key = RoleKey::new(key).map_err(|_| CatalogError::UnknownRole(key.to_string()))?;
        self.kind(&key)
    }

    /// All kinds, in declaration order.
    pub fn all_kinds(&self) -> &[RoleKind] {
        &self.kinds
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &RoleKey> {
        self.kinds.iter().map(RoleKind::key)
    }

    pub fn contains(&self, key: &RoleKey) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    roles: Vec<RoleKindEntry>,
}

#[derive(Debug, Deserialize)]
struct RoleKindEntry {
    key: String,
    label: String,
    #[serde(default)]
    emoji: Option<String>,
    #[serde(default)]
    limit: Option<u32>,
}

impl CatalogFile {
    fn into_catalog(self) -> Result<RoleCatalog, CatalogError> {
        let kinds = self
            .roles
            .into_iter()
            .map(RoleKindEntry::into_kind)
            .collect::<Result<Vec<_>, _>>()?;
        RoleCatalog::new(kinds)
    }
}

impl RoleKindEntry {
    fn into_kind(self) -> Result<RoleKind, CatalogError> {
        let key = RoleKey::new(self.key)?;
        let capacity = match self.limit {
            None => Capacity::Unbounded,
            Some(max) => {
                Capacity::limited(max).ok_or_else(|| CatalogError::InvalidCapacity(key.clone()))?
            }
        };
        let kind = RoleKind::new(key, self.label, capacity);
        Ok(match self.emoji {
            Some(emoji) => kind.with_emoji(emoji),
            None => kind,
        })
    }
}
