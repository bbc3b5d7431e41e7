//! # certa-catalog — Certification Scheme Catalog
//!
//! Static, process-wide definitions of the available certification schemes
//! and their ordered checklist items. The catalog is read-only data owned
//! by no client; every other component consumes item lists through it.
//!
//! ## Modules
//!
//! - **Items** (`item.rs`): `ChecklistItem` — id, prompt, expectation.
//!   Immutable once defined; ordering is display order and evaluation order.
//!
//! - **Schemes** (`scheme.rs`): `SchemeKey` and `CertificationScheme` —
//!   a named, ordered set of checklist items representing one certification
//!   level.
//!
//! - **Builtin data** (`builtin.rs`): the three builtin schemes
//!   (`pse-basico`, `pse-avanzado`, `pse-empresarial`) plus the legacy
//!   default item list used when a stored client references a scheme key
//!   that no longer resolves.

pub mod builtin;
pub mod item;
pub mod scheme;

pub use builtin::Catalog;
pub use item::ChecklistItem;
pub use scheme::{CertificationScheme, SchemeKey};
