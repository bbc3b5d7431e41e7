//! # Exporter Contracts
//!
//! The seams where rendering leaves the core. A document exporter turns a
//! [`DocumentSnapshot`] into a paginated document; a progress-image
//! exporter turns a [`ProgressReport`] into a single raster image. Both
//! run as one long, best-effort operation: there is no cancellation
//! support, and an abandoned export discards its partial output rather
//! than persisting it.

use thiserror::Error;

use crate::report::ProgressReport;
use crate::snapshot::DocumentSnapshot;

/// A failed export, reported as one user-visible message.
///
/// Export failures (a missing rendering dependency, a rasterization
/// exception) are caught at the top of the export operation; they never
/// corrupt the progress state they rendered from.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The rendering collaborator failed.
    #[error("export failed: {0}")]
    Collaborator(String),

    /// The output could not be written.
    #[error("export output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders a complete snapshot into a paginated document.
pub trait DocumentExporter {
    /// Produce the document bytes for a snapshot.
    fn export_document(&self, snapshot: &DocumentSnapshot) -> Result<Vec<u8>, ExportError>;
}

/// Renders aggregated progress counts into a single raster image.
pub trait ProgressImageExporter {
    /// Produce the image bytes for a report.
    fn export_image(&self, report: &ProgressReport) -> Result<Vec<u8>, ExportError>;
}
