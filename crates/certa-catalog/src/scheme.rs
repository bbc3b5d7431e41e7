//! Certification scheme types.

use serde::{Deserialize, Serialize};

use crate::item::ChecklistItem;

/// Identifier of a certification scheme (e.g. `pse-basico`).
///
/// Stored in every client record; a key that no longer resolves against
/// the catalog falls back to the legacy default item list rather than
/// failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeKey(String);

impl SchemeKey {
    /// Wrap a scheme key string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SchemeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SchemeKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// A named, ordered set of checklist items representing one
/// certification level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificationScheme {
    /// Catalog lookup key.
    pub key: SchemeKey,
    /// Human-readable name shown in headers and exports.
    pub display_name: String,
    /// Short description of the certification level.
    pub description: String,
    /// Ordered checklist items. Ordering is significant.
    pub items: Vec<ChecklistItem>,
}

impl CertificationScheme {
    /// Number of checklist items in this scheme.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
