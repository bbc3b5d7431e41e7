//! # Progress Field Map
//!
//! `ProgressState` maps typed field keys to values for one client:
//! approval verdicts stored as their wire label, evidence stored as
//! sanitized markup. Absence is meaningful — an unset approval or empty
//! evidence removes the key rather than storing an empty marker.
//!
//! The storage encoding is the string-keyed map earlier schema versions
//! wrote (`aprobado_<id>` / `evidencias_<id>`), so existing progress blobs
//! load unchanged, including the `observaciones_<id>` evidence alias and
//! the `avances:<taxId>` storage key.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, warn};

use certa_core::{ApprovalLabel, FieldKey, FieldKind, ItemStatus, TaxId};
use certa_storage::keys;
use certa_storage::{KeyValueStore, StorageError};

use crate::sanitize::sanitize_evidence;

/// Error flushing progress to storage.
#[derive(Error, Debug)]
pub enum ProgressError {
    /// Storage backend failure.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The field map could not be serialized.
    #[error("progress serialization error: {0}")]
    Serialization(String),
}

/// Aggregate progress counts over one scheme's item list.
///
/// An item is completed iff its derived status is not pending; the
/// approved/rejected/not-applicable splits partition the completed count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressTotals {
    /// Items in the active scheme.
    pub total: usize,
    /// Items whose status is resolved.
    pub completed: usize,
    /// Resolved as approved.
    pub approved: usize,
    /// Resolved as rejected.
    pub rejected: usize,
    /// Resolved as not applicable.
    pub not_applicable: usize,
    /// Items still pending.
    pub pending: usize,
}

impl ProgressTotals {
    /// Completion percentage, rounded; 0 for an empty item list.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }
}

/// The progress field map for one client, scoped to a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressState {
    fields: BTreeMap<FieldKey, String>,
}

impl ProgressState {
    /// An empty progress state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are stored.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // ─── Field access ────────────────────────────────────────────────

    /// Set or clear the approval verdict for an item.
    ///
    /// `None` represents "not yet chosen" and removes the field.
    pub fn set_approval(&mut self, item_id: u32, label: Option<ApprovalLabel>) {
        let key = FieldKey::approval(item_id);
        match label {
            Some(label) => {
                self.fields.insert(key, label.as_str().to_string());
            }
            None => {
                self.fields.remove(&key);
            }
        }
    }

    /// The approval verdict for an item, if one is set.
    ///
    /// A stored value that is not a known label (possible only in a
    /// hand-edited blob) reads as unset.
    pub fn approval(&self, item_id: u32) -> Option<ApprovalLabel> {
        self.fields
            .get(&FieldKey::approval(item_id))
            .and_then(|raw| ApprovalLabel::parse(raw).ok())
    }

    /// Store evidence for an item, passing it through sanitization.
    ///
    /// Markup that sanitizes to empty removes the field.
    pub fn set_evidence(&mut self, item_id: u32, raw_markup: &str) {
        let clean = sanitize_evidence(raw_markup);
        let key = FieldKey::evidence(item_id);
        if clean.is_empty() {
            self.fields.remove(&key);
        } else {
            self.fields.insert(key, clean);
        }
    }

    /// The sanitized evidence for an item, if non-empty.
    pub fn evidence(&self, item_id: u32) -> Option<&str> {
        self.fields
            .get(&FieldKey::evidence(item_id))
            .map(String::as_str)
    }

    /// Whether an item has non-empty evidence.
    pub fn has_evidence(&self, item_id: u32) -> bool {
        self.evidence(item_id).is_some()
    }

    /// Derived status of an item.
    pub fn status(&self, item_id: u32) -> ItemStatus {
        ItemStatus::derive(self.approval(item_id), self.has_evidence(item_id))
    }

    // ─── Bulk operations ─────────────────────────────────────────────

    /// Remove the evidence fields of the given items, leaving approvals.
    pub fn clear_evidence(&mut self, item_ids: impl IntoIterator<Item = u32>) {
        for id in item_ids {
            self.fields.remove(&FieldKey::evidence(id));
        }
    }

    /// Remove both fields of the given items.
    pub fn clear_all(&mut self, item_ids: impl IntoIterator<Item = u32>) {
        for id in item_ids {
            self.fields.remove(&FieldKey::approval(id));
            self.fields.remove(&FieldKey::evidence(id));
        }
    }

    /// Aggregate counts over the active scheme's item ids.
    pub fn totals(&self, item_ids: impl IntoIterator<Item = u32>) -> ProgressTotals {
        let mut totals = ProgressTotals::default();
        for id in item_ids {
            totals.total += 1;
            match self.status(id) {
                ItemStatus::Pending => totals.pending += 1,
                ItemStatus::Approved => {
                    totals.completed += 1;
                    totals.approved += 1;
                }
                ItemStatus::Rejected => {
                    totals.completed += 1;
                    totals.rejected += 1;
                }
                ItemStatus::NotApplicable => {
                    totals.completed += 1;
                    totals.not_applicable += 1;
                }
            }
        }
        totals
    }

    // ─── Storage round-trip ──────────────────────────────────────────

    /// Encode the field map with the storage key spellings.
    pub fn to_record(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|(key, value)| (key.to_storage_key(), value.clone()))
            .collect()
    }

    /// Decode a stored field map.
    ///
    /// Malformed keys are skipped with a warning. Stale item ids from a
    /// prior scheme are kept — they are tolerated, just never displayed —
    /// and the legacy `observaciones_` alias reads as evidence. Evidence
    /// values are re-sanitized on the way in so that pre-sanitizer blobs
    /// settle into canonical form.
    pub fn from_record(record: BTreeMap<String, String>) -> Self {
        let mut state = Self::new();
        for (raw_key, value) in record {
            match FieldKey::parse_storage_key(&raw_key) {
                Some(key) => match key.kind {
                    FieldKind::Approval => {
                        if !value.is_empty() {
                            state.fields.insert(key, value);
                        }
                    }
                    FieldKind::Evidence => {
                        let clean = sanitize_evidence(&value);
                        if !clean.is_empty() {
                            state.fields.insert(key, clean);
                        }
                    }
                },
                None => {
                    warn!(key = %raw_key, "skipping unrecognized progress field key");
                }
            }
        }
        state
    }

    /// Serialize the full field map to storage under the client's
    /// progress key.
    ///
    /// The whole map is written in one blob; because every page shares
    /// this single in-memory map, last-write-wins applies per field, not
    /// per page.
    pub fn flush<S: KeyValueStore>(
        &self,
        store: &mut S,
        tax_id: &TaxId,
    ) -> Result<(), ProgressError> {
        let blob = serde_json::to_string(&self.to_record())
            .map_err(|e| ProgressError::Serialization(e.to_string()))?;
        store.put(&keys::progress_key(tax_id), &blob)?;
        debug!(tax_id = %tax_id, fields = self.fields.len(), "progress flushed");
        Ok(())
    }

    /// Load the client's progress from storage.
    ///
    /// Reads the canonical key, falling back to the legacy `avances:` key
    /// written by earlier schema versions. A missing or corrupt blob
    /// degrades to an empty state with a warning — loss of one saved blob
    /// must not block the session.
    pub fn load<S: KeyValueStore>(store: &S, tax_id: &TaxId) -> Self {
        let blob = match Self::read_blob(store, tax_id) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Self::new(),
            Err(e) => {
                warn!(tax_id = %tax_id, error = %e, "progress unreadable; starting empty");
                return Self::new();
            }
        };
        match serde_json::from_str::<BTreeMap<String, String>>(&blob) {
            Ok(record) => Self::from_record(record),
            Err(e) => {
                warn!(tax_id = %tax_id, error = %e, "progress blob corrupt; starting empty");
                Self::new()
            }
        }
    }

    fn read_blob<S: KeyValueStore>(
        store: &S,
        tax_id: &TaxId,
    ) -> Result<Option<String>, StorageError> {
        if let Some(blob) = store.get(&keys::progress_key(tax_id))? {
            return Ok(Some(blob));
        }
        store.get(&keys::legacy_progress_key(tax_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certa_storage::MemoryStore;

    fn tax_id() -> TaxId {
        TaxId::parse("1234567890").unwrap()
    }

    #[test]
    fn test_set_and_get_approval() {
        let mut state = ProgressState::new();
        state.set_approval(1, Some(ApprovalLabel::Approved));
        assert_eq!(state.approval(1), Some(ApprovalLabel::Approved));
        assert_eq!(state.approval(2), None);
    }

    #[test]
    fn test_unset_approval_removes_field() {
        let mut state = ProgressState::new();
        state.set_approval(1, Some(ApprovalLabel::Rejected));
        state.set_approval(1, None);
        assert_eq!(state.approval(1), None);
        assert!(state.is_empty());
    }

    #[test]
    fn test_evidence_is_sanitized_on_write() {
        let mut state = ProgressState::new();
        state.set_evidence(1, "  captura\u{00A0}\u{00A0}adjunta  ");
        assert_eq!(state.evidence(1), Some("captura adjunta"));
    }

    #[test]
    fn test_empty_editor_markup_clears_evidence() {
        let mut state = ProgressState::new();
        state.set_evidence(1, "algo");
        state.set_evidence(1, "<div><br></div>");
        assert_eq!(state.evidence(1), None);
        assert!(!state.has_evidence(1));
    }

    #[test]
    fn test_status_requires_both_fields() {
        let mut state = ProgressState::new();
        assert_eq!(state.status(1), ItemStatus::Pending);

        state.set_approval(1, Some(ApprovalLabel::Approved));
        assert_eq!(state.status(1), ItemStatus::Pending);

        state.set_evidence(1, "captura");
        assert_eq!(state.status(1), ItemStatus::Approved);

        state.set_evidence(1, "");
        assert_eq!(state.status(1), ItemStatus::Pending);
    }

    #[test]
    fn test_clear_evidence_leaves_approvals() {
        let mut state = ProgressState::new();
        state.set_approval(1, Some(ApprovalLabel::Approved));
        state.set_evidence(1, "captura");
        state.clear_evidence([1]);
        assert_eq!(state.approval(1), Some(ApprovalLabel::Approved));
        assert_eq!(state.evidence(1), None);
        assert_eq!(state.status(1), ItemStatus::Pending);
    }

    #[test]
    fn test_clear_all_removes_both_kinds() {
        let mut state = ProgressState::new();
        state.set_approval(1, Some(ApprovalLabel::Rejected));
        state.set_evidence(1, "captura");
        state.set_evidence(2, "otra");
        state.clear_all([1, 2]);
        assert!(state.is_empty());
    }

    #[test]
    fn test_totals_partition() {
        let mut state = ProgressState::new();
        state.set_approval(1, Some(ApprovalLabel::Approved));
        state.set_evidence(1, "e1");
        state.set_approval(2, Some(ApprovalLabel::Rejected));
        state.set_evidence(2, "e2");
        state.set_approval(3, Some(ApprovalLabel::NotApplicable));
        state.set_evidence(3, "e3");
        // Item 4: label without evidence stays pending.
        state.set_approval(4, Some(ApprovalLabel::Approved));

        let totals = state.totals(1..=5);
        assert_eq!(totals.total, 5);
        assert_eq!(totals.completed, 3);
        assert_eq!(totals.approved, 1);
        assert_eq!(totals.rejected, 1);
        assert_eq!(totals.not_applicable, 1);
        assert_eq!(totals.pending, 2);
        assert_eq!(totals.percent(), 60);
    }

    #[test]
    fn test_totals_empty_scheme() {
        let state = ProgressState::new();
        let totals = state.totals(std::iter::empty());
        assert_eq!(totals.total, 0);
        assert_eq!(totals.percent(), 0);
    }

    #[test]
    fn test_record_roundtrip() {
        let mut state = ProgressState::new();
        state.set_approval(1, Some(ApprovalLabel::Approved));
        state.set_evidence(1, "captura");
        state.set_approval(7, Some(ApprovalLabel::NotApplicable));

        let record = state.to_record();
        assert_eq!(record.get("aprobado_1").map(String::as_str), Some("Aprobado"));
        assert_eq!(record.get("evidencias_1").map(String::as_str), Some("captura"));

        let reloaded = ProgressState::from_record(record);
        assert_eq!(reloaded, state);
    }

    #[test]
    fn test_from_record_accepts_legacy_alias_and_skips_junk() {
        let mut record = BTreeMap::new();
        record.insert("observaciones_3".to_string(), "pantallazo".to_string());
        record.insert("aprobado_3".to_string(), "Aprobado".to_string());
        record.insert("estado_3".to_string(), "???".to_string());
        record.insert("aprobado_".to_string(), "Aprobado".to_string());

        let state = ProgressState::from_record(record);
        assert_eq!(state.evidence(3), Some("pantallazo"));
        assert_eq!(state.status(3), ItemStatus::Approved);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_from_record_resanitizes_evidence() {
        let mut record = BTreeMap::new();
        record.insert("evidencias_1".to_string(), "  a\u{0000}b  ".to_string());
        record.insert("evidencias_2".to_string(), "<br>".to_string());
        let state = ProgressState::from_record(record);
        assert_eq!(state.evidence(1), Some("ab"));
        assert_eq!(state.evidence(2), None);
    }

    #[test]
    fn test_flush_then_load() {
        let mut store = MemoryStore::new();
        let mut state = ProgressState::new();
        state.set_approval(2, Some(ApprovalLabel::Rejected));
        state.set_evidence(2, "sin HTTPS");
        state.flush(&mut store, &tax_id()).unwrap();

        let loaded = ProgressState::load(&store, &tax_id());
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_load_missing_is_empty() {
        let store = MemoryStore::new();
        assert!(ProgressState::load(&store, &tax_id()).is_empty());
    }

    #[test]
    fn test_load_corrupt_blob_degrades_to_empty() {
        let mut store = MemoryStore::new();
        store.put("progress:1234567890", "{broken").unwrap();
        assert!(ProgressState::load(&store, &tax_id()).is_empty());
    }

    #[test]
    fn test_load_falls_back_to_legacy_key() {
        let mut store = MemoryStore::new();
        store
            .put("avances:1234567890", r#"{"aprobado_1":"Aprobado","evidencias_1":"ok"}"#)
            .unwrap();
        let state = ProgressState::load(&store, &tax_id());
        assert_eq!(state.status(1), ItemStatus::Approved);
    }

    #[test]
    fn test_canonical_key_wins_over_legacy() {
        let mut store = MemoryStore::new();
        store.put("progress:1234567890", r#"{"aprobado_1":"Aprobado"}"#).unwrap();
        store.put("avances:1234567890", r#"{"aprobado_1":"No aprobado"}"#).unwrap();
        let state = ProgressState::load(&store, &tax_id());
        assert_eq!(state.approval(1), Some(ApprovalLabel::Approved));
    }

    #[test]
    fn test_stale_keys_are_kept_but_not_displayed() {
        // Scheme switched from 12 items to 5: fields for items 6..12
        // survive the round trip even though nothing shows them.
        let mut state = ProgressState::new();
        state.set_approval(11, Some(ApprovalLabel::Approved));
        state.set_evidence(11, "viejo");
        let reloaded = ProgressState::from_record(state.to_record());
        assert_eq!(reloaded.status(11), ItemStatus::Approved);
        assert_eq!(reloaded.totals(1..=5).total, 5);
        assert_eq!(reloaded.totals(1..=5).completed, 0);
    }
}
