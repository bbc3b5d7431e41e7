//! Checklist item type.

use serde::{Deserialize, Serialize};

/// One entry of a certification checklist.
///
/// Immutable once defined in a scheme. The `id` is unique and stable
/// within its scheme — progress fields are addressed by it — and the
/// position of the item in the scheme's list is its display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Scheme-scoped stable identifier.
    pub id: u32,
    /// The requirement shown to the auditor.
    pub prompt: String,
    /// What a compliant implementation is expected to demonstrate.
    pub expectation: String,
}

impl ChecklistItem {
    /// Construct an item from borrowed text (used by the builtin tables).
    pub fn new(id: u32, prompt: &str, expectation: &str) -> Self {
        Self {
            id,
            prompt: prompt.to_string(),
            expectation: expectation.to_string(),
        }
    }
}
