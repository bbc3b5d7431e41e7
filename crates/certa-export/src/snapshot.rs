//! Document snapshot assembly.

use std::io::Write;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use certa_catalog::ChecklistItem;
use certa_core::{ItemStatus, TaxId, Timestamp};
use certa_progress::ProgressState;
use certa_registry::ClientRecord;

use crate::collaborator::{DocumentExporter, ExportError};

/// Display string for an item whose approval is not yet chosen.
const UNSELECTED_DISPLAY: &str = "Sin seleccionar";

/// Default document title when the caller supplies none.
pub const DEFAULT_TITLE: &str = "Checklist de Certificación";

/// One checklist item, fully resolved for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedItem {
    /// 1-based display position.
    pub position: usize,
    /// Scheme-scoped item id.
    pub item_id: u32,
    /// The requirement text.
    pub prompt: String,
    /// The expectation text.
    pub expectation: String,
    /// Approval verdict as displayed (`Sin seleccionar` when unset).
    pub approval_display: String,
    /// Derived status, for the renderer's status badge.
    pub status: ItemStatus,
    /// Sanitized evidence markup, possibly empty.
    pub evidence: String,
}

/// A complete, ordered view of one certification, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    /// Document title.
    pub title: String,
    /// Client display name.
    pub client_name: String,
    /// Client tax identifier.
    pub tax_id: TaxId,
    /// Display name of the certification scheme.
    pub scheme_name: String,
    /// When the snapshot was assembled.
    pub date: Timestamp,
    /// Optional logo image to place in the header.
    pub logo: Option<PathBuf>,
    /// Every item of the active scheme, in display order.
    pub items: Vec<ResolvedItem>,
}

impl DocumentSnapshot {
    /// Assemble a snapshot from the session's parts.
    ///
    /// Every item in `items` appears in the result, resolved against the
    /// progress map — a renderer never sees a partial list.
    pub fn assemble(
        title: &str,
        record: &ClientRecord,
        scheme_name: &str,
        items: &[ChecklistItem],
        progress: &ProgressState,
        logo: Option<PathBuf>,
    ) -> Self {
        let resolved = items
            .iter()
            .enumerate()
            .map(|(idx, item)| ResolvedItem {
                position: idx + 1,
                item_id: item.id,
                prompt: item.prompt.clone(),
                expectation: item.expectation.clone(),
                approval_display: progress
                    .approval(item.id)
                    .map(|label| label.as_str().to_string())
                    .unwrap_or_else(|| UNSELECTED_DISPLAY.to_string()),
                status: progress.status(item.id),
                evidence: progress.evidence(item.id).unwrap_or_default().to_string(),
            })
            .collect();

        Self {
            title: title.to_string(),
            client_name: record.name.clone(),
            tax_id: record.tax_id.clone(),
            scheme_name: scheme_name.to_string(),
            date: Timestamp::now(),
            logo,
            items: resolved,
        }
    }
}

/// Writes a snapshot as pretty-printed JSON — the handoff format for
/// renderers that run outside this process.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDocumentWriter;

impl JsonDocumentWriter {
    /// Serialize the snapshot to the writer.
    pub fn write_to<W: Write>(
        &self,
        snapshot: &DocumentSnapshot,
        mut out: W,
    ) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut out, snapshot)
            .map_err(|e| ExportError::Collaborator(e.to_string()))?;
        out.write_all(b"\n").map_err(ExportError::Io)
    }
}

impl DocumentExporter for JsonDocumentWriter {
    fn export_document(&self, snapshot: &DocumentSnapshot) -> Result<Vec<u8>, ExportError> {
        let mut buf = Vec::new();
        self.write_to(snapshot, &mut buf)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certa_catalog::{Catalog, SchemeKey};
    use certa_core::ApprovalLabel;

    fn record() -> ClientRecord {
        ClientRecord {
            tax_id: TaxId::parse("1234567890").unwrap(),
            name: "Comercio Acme".to_string(),
            scheme_key: SchemeKey::new("pse-basico"),
            created_at: Timestamp::parse("2026-03-01T12:00:00Z").unwrap(),
            last_modified: Timestamp::parse("2026-03-01T12:00:00Z").unwrap(),
        }
    }

    fn snapshot() -> DocumentSnapshot {
        let catalog = Catalog::builtin();
        let items = catalog.resolve(&SchemeKey::new("pse-basico"));
        let mut progress = ProgressState::new();
        progress.set_approval(1, Some(ApprovalLabel::Approved));
        progress.set_evidence(1, "flujo OAuth validado");
        progress.set_approval(2, Some(ApprovalLabel::Rejected));
        // Item 2 has no evidence: stays pending in the snapshot.

        DocumentSnapshot::assemble(
            DEFAULT_TITLE,
            &record(),
            "PSE Básico",
            items,
            &progress,
            None,
        )
    }

    #[test]
    fn test_snapshot_covers_every_item_in_order() {
        let snap = snapshot();
        assert_eq!(snap.items.len(), 5);
        let positions: Vec<usize> = snap.items.iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_resolved_statuses() {
        let snap = snapshot();
        assert_eq!(snap.items[0].status, ItemStatus::Approved);
        assert_eq!(snap.items[0].approval_display, "Aprobado");
        assert_eq!(snap.items[0].evidence, "flujo OAuth validado");

        // Verdict without evidence renders its label but stays pending.
        assert_eq!(snap.items[1].status, ItemStatus::Pending);
        assert_eq!(snap.items[1].approval_display, "No aprobado");

        assert_eq!(snap.items[2].status, ItemStatus::Pending);
        assert_eq!(snap.items[2].approval_display, "Sin seleccionar");
        assert_eq!(snap.items[2].evidence, "");
    }

    #[test]
    fn test_snapshot_header_fields() {
        let snap = snapshot();
        assert_eq!(snap.client_name, "Comercio Acme");
        assert_eq!(snap.tax_id.as_str(), "1234567890");
        assert_eq!(snap.scheme_name, "PSE Básico");
        assert!(snap.logo.is_none());
    }

    #[test]
    fn test_json_writer_emits_parseable_snapshot() {
        let snap = snapshot();
        let mut buf = Vec::new();
        JsonDocumentWriter.write_to(&snap, &mut buf).unwrap();
        let parsed: DocumentSnapshot = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, snap);
    }

    #[test]
    fn test_json_writer_as_document_exporter() {
        let snap = snapshot();
        let bytes = JsonDocumentWriter.export_document(&snap).unwrap();
        let parsed: DocumentSnapshot = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed.items.len(), snap.items.len());
    }
}
