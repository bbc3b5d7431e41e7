//! # Typed Progress Field Keys
//!
//! One checklist item owns two progress fields: its approval verdict and
//! its evidence markup. `FieldKey` addresses a single field as the pair
//! `(item_id, FieldKind)`.
//!
//! Earlier schema versions addressed fields with constructed strings —
//! `"aprobado_<id>"` and `"evidencias_<id>"` (with `"observaciones_<id>"`
//! as an older alias for evidence). A typo in the prefix silently created a
//! key nothing ever read back. The typed key eliminates that bug class;
//! the string form survives only as the storage encoding, produced and
//! parsed here.

use serde::{Deserialize, Serialize};

/// Storage prefix for approval fields.
const APPROVAL_PREFIX: &str = "aprobado_";
/// Storage prefix for evidence fields.
const EVIDENCE_PREFIX: &str = "evidencias_";
/// Legacy storage prefix still found in old progress blobs.
const EVIDENCE_LEGACY_PREFIX: &str = "observaciones_";

/// The two kinds of progress data recorded per checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// The enumerated compliance verdict.
    Approval,
    /// Sanitized rich-text evidence markup.
    Evidence,
}

/// Typed address of one piece of progress data: `(item id, field kind)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldKey {
    /// The checklist item this field belongs to.
    pub item_id: u32,
    /// Which of the item's two fields this addresses.
    pub kind: FieldKind,
}

impl FieldKey {
    /// The approval field of an item.
    pub fn approval(item_id: u32) -> Self {
        Self {
            item_id,
            kind: FieldKind::Approval,
        }
    }

    /// The evidence field of an item.
    pub fn evidence(item_id: u32) -> Self {
        Self {
            item_id,
            kind: FieldKind::Evidence,
        }
    }

    /// The storage encoding of this key (`aprobado_<id>` / `evidencias_<id>`).
    ///
    /// Always emits the canonical prefixes; the legacy `observaciones_`
    /// alias is read-only compatibility.
    pub fn to_storage_key(&self) -> String {
        match self.kind {
            FieldKind::Approval => format!("{APPROVAL_PREFIX}{}", self.item_id),
            FieldKind::Evidence => format!("{EVIDENCE_PREFIX}{}", self.item_id),
        }
    }

    /// Parse a storage key, accepting the legacy evidence alias.
    ///
    /// Returns `None` for keys that do not match any known prefix or whose
    /// id suffix is not a number — callers decide whether to warn or skip.
    pub fn parse_storage_key(key: &str) -> Option<Self> {
        let (kind, rest) = if let Some(rest) = key.strip_prefix(APPROVAL_PREFIX) {
            (FieldKind::Approval, rest)
        } else if let Some(rest) = key.strip_prefix(EVIDENCE_PREFIX) {
            (FieldKind::Evidence, rest)
        } else if let Some(rest) = key.strip_prefix(EVIDENCE_LEGACY_PREFIX) {
            (FieldKind::Evidence, rest)
        } else {
            return None;
        };
        let item_id = rest.parse().ok()?;
        Some(Self { item_id, kind })
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_storage_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_encoding() {
        assert_eq!(FieldKey::approval(3).to_storage_key(), "aprobado_3");
        assert_eq!(FieldKey::evidence(12).to_storage_key(), "evidencias_12");
    }

    #[test]
    fn test_parse_canonical_prefixes() {
        assert_eq!(
            FieldKey::parse_storage_key("aprobado_7"),
            Some(FieldKey::approval(7))
        );
        assert_eq!(
            FieldKey::parse_storage_key("evidencias_7"),
            Some(FieldKey::evidence(7))
        );
    }

    #[test]
    fn test_parse_legacy_evidence_alias() {
        assert_eq!(
            FieldKey::parse_storage_key("observaciones_4"),
            Some(FieldKey::evidence(4))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_prefix() {
        assert_eq!(FieldKey::parse_storage_key("estado_1"), None);
        assert_eq!(FieldKey::parse_storage_key("aprobado"), None);
        assert_eq!(FieldKey::parse_storage_key(""), None);
    }

    #[test]
    fn test_parse_rejects_non_numeric_id() {
        assert_eq!(FieldKey::parse_storage_key("aprobado_x"), None);
        assert_eq!(FieldKey::parse_storage_key("evidencias_"), None);
    }

    #[test]
    fn test_roundtrip() {
        for key in [FieldKey::approval(1), FieldKey::evidence(42)] {
            assert_eq!(FieldKey::parse_storage_key(&key.to_storage_key()), Some(key));
        }
    }
}
