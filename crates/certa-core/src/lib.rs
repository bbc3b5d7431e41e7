//! # certa-core — Foundational Types for the Certa Tracker
//!
//! This crate is the bedrock of the Certa certification tracker. It defines
//! the type-system primitives every other crate in the workspace depends on;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `TaxId` and `SchemeKey`
//!    (in `certa-catalog`) are newtypes with validated constructors. No bare
//!    strings for identifiers.
//!
//! 2. **Closed enums for enumerated state.** `ApprovalLabel`, `ItemStatus`,
//!    and `FieldKind` are exhaustive enums matched everywhere. There is no
//!    string comparison against a compliance verdict anywhere in the
//!    workspace — the stringly-typed field map of earlier schema versions
//!    survives only at the storage boundary.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, matching the ISO-8601 strings the
//!    storage blobs have always carried.
//!
//! 4. **Pure status derivation.** `ItemStatus::derive()` is the single
//!    definition of when a checklist item counts as resolved. Presentation
//!    layers consume it; nothing re-derives status from rendered output.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `certa-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Errors are per-module `thiserror` enums carrying the rejected value.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize` where they are persisted.

pub mod approval;
pub mod field;
pub mod taxid;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use approval::{ApprovalLabel, ItemStatus, UnknownLabel};
pub use field::{FieldKey, FieldKind};
pub use taxid::{TaxId, TaxIdError};
pub use temporal::{Timestamp, TimestampError};
