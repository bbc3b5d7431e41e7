//! Aggregated progress report for the summary-image collaborator.

use serde::{Deserialize, Serialize};

use certa_core::TaxId;
use certa_progress::ProgressTotals;
use certa_registry::ClientRecord;

/// The already-aggregated counts a summary-image renderer consumes.
///
/// Purely a function of the totals the progress store computes; the
/// renderer does no counting of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Client display name.
    pub client_name: String,
    /// Client tax identifier.
    pub tax_id: TaxId,
    /// Display name of the certification scheme.
    pub scheme_name: String,
    /// Items in the scheme.
    pub total: usize,
    /// Items with a resolved status.
    pub completed: usize,
    /// Resolved as approved.
    pub approved: usize,
    /// Resolved as rejected.
    pub rejected: usize,
    /// Completion percentage, rounded.
    pub percent: u32,
}

impl ProgressReport {
    /// Assemble the report from a record and its progress totals.
    pub fn assemble(record: &ClientRecord, scheme_name: &str, totals: ProgressTotals) -> Self {
        Self {
            client_name: record.name.clone(),
            tax_id: record.tax_id.clone(),
            scheme_name: scheme_name.to_string(),
            total: totals.total,
            completed: totals.completed,
            approved: totals.approved,
            rejected: totals.rejected,
            percent: totals.percent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certa_catalog::SchemeKey;
    use certa_core::{ApprovalLabel, Timestamp};
    use certa_progress::ProgressState;

    #[test]
    fn test_report_carries_aggregates() {
        let record = ClientRecord {
            tax_id: TaxId::parse("1234567890").unwrap(),
            name: "Comercio Acme".to_string(),
            scheme_key: SchemeKey::new("pse-basico"),
            created_at: Timestamp::parse("2026-03-01T12:00:00Z").unwrap(),
            last_modified: Timestamp::parse("2026-03-01T12:00:00Z").unwrap(),
        };
        let mut progress = ProgressState::new();
        progress.set_approval(1, Some(ApprovalLabel::Approved));
        progress.set_evidence(1, "ok");
        progress.set_approval(2, Some(ApprovalLabel::Rejected));
        progress.set_evidence(2, "falla");

        let report = ProgressReport::assemble(&record, "PSE Básico", progress.totals(1..=5));
        assert_eq!(report.total, 5);
        assert_eq!(report.completed, 2);
        assert_eq!(report.approved, 1);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.percent, 40);
        assert_eq!(report.scheme_name, "PSE Básico");
    }
}
