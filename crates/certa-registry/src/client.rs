//! Client record type.

use serde::{Deserialize, Serialize};

use certa_catalog::SchemeKey;
use certa_core::{TaxId, Timestamp};

/// A client under certification.
///
/// The serde field names match the blobs the original portal wrote
/// (`nit`, `certificationType`, camelCase timestamps), so existing
/// records load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    /// The validated tax identifier the record is keyed by.
    #[serde(rename = "nit")]
    pub tax_id: TaxId,
    /// Client display name.
    pub name: String,
    /// Chosen certification scheme. May reference a scheme that no longer
    /// exists, in which case item resolution falls back to the legacy list.
    #[serde(rename = "certificationType")]
    pub scheme_key: SchemeKey,
    /// When the record was created.
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
    /// Updated on every persisted progress save.
    #[serde(rename = "lastModified")]
    pub last_modified: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_legacy_field_names() {
        let record = ClientRecord {
            tax_id: TaxId::parse("1234567890").unwrap(),
            name: "Comercio Acme".to_string(),
            scheme_key: SchemeKey::new("pse-basico"),
            created_at: Timestamp::parse("2026-03-01T12:00:00Z").unwrap(),
            last_modified: Timestamp::parse("2026-03-01T12:00:00Z").unwrap(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["nit"], "1234567890");
        assert_eq!(json["certificationType"], "pse-basico");
        assert_eq!(json["createdAt"], "2026-03-01T12:00:00Z");
        assert_eq!(json["lastModified"], "2026-03-01T12:00:00Z");
    }

    #[test]
    fn test_loads_original_portal_blob() {
        // Shape written by the original browser portal, millisecond
        // timestamps included.
        let blob = r#"{
            "nit": "9001234567",
            "name": "Pagos del Sur",
            "certificationType": "pse-avanzado",
            "createdAt": "2025-11-20T08:30:00.123Z",
            "lastModified": "2026-01-05T17:45:10.999Z"
        }"#;
        let record: ClientRecord = serde_json::from_str(blob).unwrap();
        assert_eq!(record.tax_id.as_str(), "9001234567");
        assert_eq!(record.scheme_key.as_str(), "pse-avanzado");
        assert_eq!(record.created_at.to_iso8601(), "2025-11-20T08:30:00Z");
        assert_eq!(record.last_modified.to_iso8601(), "2026-01-05T17:45:10Z");
    }
}
