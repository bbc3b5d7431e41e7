//! # Approval Labels and Derived Item Status
//!
//! `ApprovalLabel` is the enumerated compliance verdict an auditor assigns
//! to a checklist item; `ItemStatus` is the visual/reporting status derived
//! from the verdict plus the presence of evidence.
//!
//! ## Derivation Rule
//!
//! An item is *resolved* only when BOTH an approval label is set AND its
//! evidence field is non-empty. Until then it is `Pending`, whatever the
//! label says. [`ItemStatus::derive()`] is the only implementation of this
//! rule in the workspace — presentation layers and exporters consume it,
//! never recompute it.
//!
//! ## Wire Strings
//!
//! The stored representation keeps the Spanish labels earlier schema
//! versions wrote (`"Aprobado"`, `"No aprobado"`, `"No aplica"`), so blobs
//! written by the original portal load unchanged.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Approval Label ──────────────────────────────────────────────────

/// The enumerated compliance verdict for one checklist item.
///
/// "Not yet chosen" is represented as absence (`Option<ApprovalLabel>`),
/// not as a variant — an unset select box is not a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApprovalLabel {
    /// The item meets the expectation.
    #[serde(rename = "Aprobado")]
    Approved,
    /// The item fails the expectation.
    #[serde(rename = "No aprobado")]
    Rejected,
    /// The expectation does not apply to this client.
    #[serde(rename = "No aplica")]
    NotApplicable,
}

/// Error parsing an [`ApprovalLabel`] from its stored string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown approval label: {0:?}")]
pub struct UnknownLabel(pub String);

impl ApprovalLabel {
    /// The stored/displayed wire string for this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "Aprobado",
            Self::Rejected => "No aprobado",
            Self::NotApplicable => "No aplica",
        }
    }

    /// Parse a stored wire string. Empty input is not a label — callers
    /// model that as `None` before reaching here.
    pub fn parse(s: &str) -> Result<Self, UnknownLabel> {
        match s {
            "Aprobado" => Ok(Self::Approved),
            "No aprobado" => Ok(Self::Rejected),
            "No aplica" => Ok(Self::NotApplicable),
            other => Err(UnknownLabel(other.to_string())),
        }
    }
}

impl std::fmt::Display for ApprovalLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ApprovalLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ─── Derived Item Status ─────────────────────────────────────────────

/// The derived status of one checklist item. Computed, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    /// No verdict yet, or verdict without supporting evidence.
    Pending,
    /// Approved with evidence.
    Approved,
    /// Rejected with evidence.
    Rejected,
    /// Marked not applicable, with evidence of why.
    NotApplicable,
}

impl ItemStatus {
    /// Derive the status from the approval verdict and evidence presence.
    ///
    /// `Pending` iff the approval is unset OR the evidence is empty;
    /// otherwise the status mirrors the label exactly.
    pub fn derive(approval: Option<ApprovalLabel>, has_evidence: bool) -> Self {
        match (approval, has_evidence) {
            (Some(ApprovalLabel::Approved), true) => Self::Approved,
            (Some(ApprovalLabel::Rejected), true) => Self::Rejected,
            (Some(ApprovalLabel::NotApplicable), true) => Self::NotApplicable,
            _ => Self::Pending,
        }
    }

    /// Whether the item counts toward completion totals.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::NotApplicable => "not-applicable",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_wire_strings() {
        assert_eq!(ApprovalLabel::Approved.as_str(), "Aprobado");
        assert_eq!(ApprovalLabel::Rejected.as_str(), "No aprobado");
        assert_eq!(ApprovalLabel::NotApplicable.as_str(), "No aplica");
    }

    #[test]
    fn test_label_parse_roundtrip() {
        for label in [
            ApprovalLabel::Approved,
            ApprovalLabel::Rejected,
            ApprovalLabel::NotApplicable,
        ] {
            assert_eq!(ApprovalLabel::parse(label.as_str()).unwrap(), label);
        }
    }

    #[test]
    fn test_label_parse_unknown() {
        assert!(ApprovalLabel::parse("si").is_err());
        assert!(ApprovalLabel::parse("no").is_err());
        assert!(ApprovalLabel::parse("").is_err());
    }

    #[test]
    fn test_label_serde_uses_wire_string() {
        let json = serde_json::to_string(&ApprovalLabel::Rejected).unwrap();
        assert_eq!(json, "\"No aprobado\"");
        let parsed: ApprovalLabel = serde_json::from_str("\"No aplica\"").unwrap();
        assert_eq!(parsed, ApprovalLabel::NotApplicable);
    }

    #[test]
    fn test_status_pending_without_label() {
        assert_eq!(ItemStatus::derive(None, true), ItemStatus::Pending);
        assert_eq!(ItemStatus::derive(None, false), ItemStatus::Pending);
    }

    #[test]
    fn test_status_pending_without_evidence() {
        assert_eq!(
            ItemStatus::derive(Some(ApprovalLabel::Approved), false),
            ItemStatus::Pending
        );
        assert_eq!(
            ItemStatus::derive(Some(ApprovalLabel::NotApplicable), false),
            ItemStatus::Pending
        );
    }

    #[test]
    fn test_status_mirrors_label_with_evidence() {
        assert_eq!(
            ItemStatus::derive(Some(ApprovalLabel::Approved), true),
            ItemStatus::Approved
        );
        assert_eq!(
            ItemStatus::derive(Some(ApprovalLabel::Rejected), true),
            ItemStatus::Rejected
        );
        assert_eq!(
            ItemStatus::derive(Some(ApprovalLabel::NotApplicable), true),
            ItemStatus::NotApplicable
        );
    }

    #[test]
    fn test_is_resolved() {
        assert!(!ItemStatus::Pending.is_resolved());
        assert!(ItemStatus::Approved.is_resolved());
        assert!(ItemStatus::Rejected.is_resolved());
        assert!(ItemStatus::NotApplicable.is_resolved());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ItemStatus::NotApplicable.to_string(), "not-applicable");
        assert_eq!(ItemStatus::Pending.to_string(), "pending");
    }
}
