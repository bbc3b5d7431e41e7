//! # certa-export — Export Snapshot Assembly
//!
//! The core's half of the export contract: assemble a complete,
//! already-resolved view of a certification for a downstream renderer.
//! The renderers themselves (PDF pagination, raster summary images) are
//! external collaborators behind the traits in `collaborator.rs`; nothing
//! here rasterizes anything.
//!
//! ## Contract
//!
//! Exporters receive the whole picture in one call — every item with its
//! resolved status and evidence, or the final aggregated counts. There is
//! no partial or streaming delivery, and a failed export never touches the
//! underlying progress state.

pub mod collaborator;
pub mod report;
pub mod snapshot;

pub use collaborator::{DocumentExporter, ExportError, ProgressImageExporter};
pub use report::ProgressReport;
pub use snapshot::{DocumentSnapshot, JsonDocumentWriter, ResolvedItem, DEFAULT_TITLE};
