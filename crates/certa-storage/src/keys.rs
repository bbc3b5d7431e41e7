//! # Storage Key Namespace
//!
//! All storage keys are `<namespace>:<taxId>`. Two namespaces are written
//! today; the rest are legacy variants earlier schema versions wrote, kept
//! so client deletion sweeps every blob a tax id ever owned.

use certa_core::TaxId;

/// Namespace for client records.
pub const CLIENT_NS: &str = "client";
/// Namespace for progress field maps.
pub const PROGRESS_NS: &str = "progress";
/// Progress namespace written by the original portal.
pub const LEGACY_PROGRESS_NS: &str = "avances";

/// Legacy namespaces swept on deletion. None are written anymore.
pub const LEGACY_NAMESPACES: [&str; 7] = [
    "cliente",
    "avances",
    "evidencias",
    "progreso",
    "checklist",
    "datos",
    "autosave",
];

/// Key of the client record blob.
pub fn client_key(tax_id: &TaxId) -> String {
    format!("{CLIENT_NS}:{tax_id}")
}

/// Key of the progress field-map blob.
pub fn progress_key(tax_id: &TaxId) -> String {
    format!("{PROGRESS_NS}:{tax_id}")
}

/// Legacy progress key consulted when the canonical one is absent.
pub fn legacy_progress_key(tax_id: &TaxId) -> String {
    format!("{LEGACY_PROGRESS_NS}:{tax_id}")
}

/// Every key a deletion must remove for a tax id: the canonical client and
/// progress keys plus all legacy variants.
pub fn deletion_keys(tax_id: &TaxId) -> Vec<String> {
    let mut keys = vec![client_key(tax_id), progress_key(tax_id)];
    keys.extend(
        LEGACY_NAMESPACES
            .iter()
            .map(|ns| format!("{ns}:{tax_id}")),
    );
    keys
}
