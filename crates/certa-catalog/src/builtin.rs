//! # Builtin Scheme Definitions
//!
//! The certification levels form a ladder: each level extends the previous
//! one with additional requirements, so all three schemes are prefixes of a
//! single master item table. The legacy default list (served when a stored
//! scheme key no longer resolves) is the first ten entries of the same
//! table — the checklist the portal shipped before schemes existed.

use serde::{Deserialize, Serialize};

use crate::item::ChecklistItem;
use crate::scheme::{CertificationScheme, SchemeKey};

/// Master requirement table. Every builtin scheme takes a prefix of it.
const MASTER_ITEMS: [(&str, &str); 12] = [
    (
        "Autenticación OAuth 2.0/OpenID Connect implementada",
        "El sistema debe autenticar usando OAuth 2.0 o OpenID Connect, siguiendo los estándares de seguridad.",
    ),
    (
        "Uso de tokens JWT válidos",
        "Las peticiones deben incluir tokens JWT válidos y no expirados.",
    ),
    (
        "Comunicación solo por HTTPS",
        "Todas las comunicaciones con la API deben realizarse exclusivamente por HTTPS.",
    ),
    (
        "Gestión de expiración y refresh de tokens",
        "El sistema debe manejar la expiración de tokens y usar refresh tokens cuando corresponda.",
    ),
    (
        "Almacenamiento seguro de credenciales",
        "Las credenciales y secretos deben almacenarse de forma segura y nunca exponerse públicamente.",
    ),
    (
        "Solicita solo los permisos necesarios",
        "El sistema debe solicitar únicamente los permisos (scopes) estrictamente necesarios.",
    ),
    (
        "Respeta restricciones de acceso",
        "El sistema debe respetar las restricciones de acceso según los permisos otorgados.",
    ),
    (
        "Manejo de errores y límites de uso",
        "El sistema debe manejar correctamente errores y límites de uso (rate limiting).",
    ),
    (
        "Pruebas de integración y seguridad realizadas",
        "Se deben realizar pruebas de integración y seguridad con la API.",
    ),
    (
        "Documentación revisada y comprendida",
        "El equipo debe haber revisado y comprendido la documentación de autenticación y autorización.",
    ),
    (
        "Implementación de auditoría y logging",
        "El sistema debe registrar todas las transacciones y eventos de seguridad relevantes.",
    ),
    (
        "Configuración de alta disponibilidad",
        "El sistema debe estar configurado para garantizar alta disponibilidad y recuperación ante desastres.",
    ),
];

/// Number of items in the legacy default list.
const LEGACY_ITEM_COUNT: usize = 10;

/// Build the first `count` master items, ids starting at 1.
fn master_prefix(count: usize) -> Vec<ChecklistItem> {
    MASTER_ITEMS[..count]
        .iter()
        .enumerate()
        .map(|(idx, (prompt, expectation))| ChecklistItem::new(idx as u32 + 1, prompt, expectation))
        .collect()
}

/// The read-only catalog of certification schemes.
///
/// Built once at startup via [`Catalog::builtin()`] and shared by
/// reference; no client owns or mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    schemes: Vec<CertificationScheme>,
    legacy_items: Vec<ChecklistItem>,
}

impl Catalog {
    /// The builtin catalog: three scheme levels plus the legacy default list.
    pub fn builtin() -> Self {
        let schemes = vec![
            CertificationScheme {
                key: SchemeKey::new("pse-basico"),
                display_name: "PSE Básico".to_string(),
                description: "Certificación estándar".to_string(),
                items: master_prefix(5),
            },
            CertificationScheme {
                key: SchemeKey::new("pse-avanzado"),
                display_name: "PSE Avanzado".to_string(),
                description: "Certificación completa".to_string(),
                items: master_prefix(8),
            },
            CertificationScheme {
                key: SchemeKey::new("pse-empresarial"),
                display_name: "PSE Empresarial".to_string(),
                description: "Certificación corporativa".to_string(),
                items: master_prefix(12),
            },
        ];
        Self {
            schemes,
            legacy_items: master_prefix(LEGACY_ITEM_COUNT),
        }
    }

    /// Look up a scheme by key.
    pub fn scheme(&self, key: &SchemeKey) -> Option<&CertificationScheme> {
        self.schemes.iter().find(|s| &s.key == key)
    }

    /// Whether the key names a known scheme.
    pub fn contains(&self, key: &SchemeKey) -> bool {
        self.scheme(key).is_some()
    }

    /// All scheme definitions, in catalog order.
    pub fn schemes(&self) -> &[CertificationScheme] {
        &self.schemes
    }

    /// The item list for a stored scheme key, falling back to the legacy
    /// default list when the key no longer resolves.
    ///
    /// Clients created before scheme selection existed (or whose scheme was
    /// since removed) keep working against the original ten-item checklist.
    pub fn resolve(&self, key: &SchemeKey) -> &[ChecklistItem] {
        match self.scheme(key) {
            Some(scheme) => &scheme.items,
            None => &self.legacy_items,
        }
    }

    /// The legacy default item list.
    pub fn legacy_items(&self) -> &[ChecklistItem] {
        &self.legacy_items
    }

    /// Display name for a scheme key, falling back to the legacy label.
    pub fn display_name(&self, key: &SchemeKey) -> &str {
        match self.scheme(key) {
            Some(scheme) => &scheme.display_name,
            None => "Certificación estándar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scheme_count() {
        assert_eq!(Catalog::builtin().schemes().len(), 3);
    }

    #[test]
    fn test_builtin_item_counts() {
        let catalog = Catalog::builtin();
        let counts: Vec<usize> = catalog
            .schemes()
            .iter()
            .map(|s| s.item_count())
            .collect();
        assert_eq!(counts, vec![5, 8, 12]);
        assert_eq!(catalog.legacy_items().len(), 10);
    }

    #[test]
    fn test_item_ids_are_sequential_from_one() {
        let catalog = Catalog::builtin();
        for scheme in catalog.schemes() {
            for (idx, item) in scheme.items.iter().enumerate() {
                assert_eq!(item.id, idx as u32 + 1);
            }
        }
    }

    #[test]
    fn test_levels_are_prefixes_of_each_other() {
        let catalog = Catalog::builtin();
        let basico = &catalog.scheme(&SchemeKey::new("pse-basico")).unwrap().items;
        let avanzado = &catalog.scheme(&SchemeKey::new("pse-avanzado")).unwrap().items;
        let empresarial = &catalog
            .scheme(&SchemeKey::new("pse-empresarial"))
            .unwrap()
            .items;
        assert_eq!(&avanzado[..5], &basico[..]);
        assert_eq!(&empresarial[..8], &avanzado[..]);
    }

    #[test]
    fn test_resolve_known_key() {
        let catalog = Catalog::builtin();
        let items = catalog.resolve(&SchemeKey::new("pse-avanzado"));
        assert_eq!(items.len(), 8);
    }

    #[test]
    fn test_resolve_unknown_key_falls_back_to_legacy() {
        let catalog = Catalog::builtin();
        let items = catalog.resolve(&SchemeKey::new("pse-retirado"));
        assert_eq!(items, catalog.legacy_items());
        assert_eq!(items.len(), 10);
    }

    #[test]
    fn test_contains() {
        let catalog = Catalog::builtin();
        assert!(catalog.contains(&SchemeKey::new("pse-basico")));
        assert!(!catalog.contains(&SchemeKey::new("")));
    }

    #[test]
    fn test_display_name_fallback() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.display_name(&SchemeKey::new("pse-empresarial")),
            "PSE Empresarial"
        );
        assert_eq!(
            catalog.display_name(&SchemeKey::new("desconocido")),
            "Certificación estándar"
        );
    }

    #[test]
    fn test_scheme_serde_roundtrip() {
        let catalog = Catalog::builtin();
        let scheme = catalog.scheme(&SchemeKey::new("pse-basico")).unwrap();
        let json = serde_json::to_string(scheme).unwrap();
        let parsed: CertificationScheme = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.items, scheme.items);
        assert_eq!(parsed.key, scheme.key);
    }
}
