//! `certa export` — document snapshot and progress summary generation.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use certa_catalog::Catalog;
use certa_export::{DocumentSnapshot, JsonDocumentWriter, ProgressReport, DEFAULT_TITLE};

use crate::{open_session, parse_tax_id};

/// Export snapshot generation.
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(subcommand)]
    pub command: ExportCommand,
}

#[derive(Subcommand, Debug)]
pub enum ExportCommand {
    /// Emit the fully-resolved checklist snapshot a document renderer
    /// consumes.
    Document {
        /// 10-digit tax id.
        tax_id: String,
        /// Document title.
        #[arg(long, default_value = DEFAULT_TITLE)]
        title: String,
        /// Logo image to reference in the header.
        #[arg(long)]
        logo: Option<PathBuf>,
        /// Output file (stdout when omitted).
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Emit the aggregated progress report a summary-image renderer
    /// consumes.
    Summary {
        /// 10-digit tax id.
        tax_id: String,
    },
}

/// Dispatch a `certa export` invocation.
pub fn run(args: ExportArgs, data_dir: &Path) -> Result<()> {
    let catalog = Catalog::builtin();
    match args.command {
        ExportCommand::Document {
            tax_id,
            title,
            logo,
            out,
        } => {
            let tax_id = parse_tax_id(&tax_id)?;
            let session = open_session(data_dir, &catalog, &tax_id)?;
            let record = session.record();
            let snapshot = DocumentSnapshot::assemble(
                &title,
                record,
                catalog.display_name(&record.scheme_key),
                session.items(),
                session.progress(),
                logo,
            );

            match out {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("cannot create {}", path.display()))?;
                    JsonDocumentWriter.write_to(&snapshot, file)?;
                    println!(
                        "document snapshot for {} written to {} ({} items)",
                        tax_id,
                        path.display(),
                        snapshot.items.len()
                    );
                }
                None => JsonDocumentWriter.write_to(&snapshot, io::stdout().lock())?,
            }
            Ok(())
        }
        ExportCommand::Summary { tax_id } => {
            let tax_id = parse_tax_id(&tax_id)?;
            let session = open_session(data_dir, &catalog, &tax_id)?;
            let record = session.record();
            let report = ProgressReport::assemble(
                record,
                catalog.display_name(&record.scheme_key),
                session.totals(),
            );
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &report)?;
            stdout.write_all(b"\n")?;
            Ok(())
        }
    }
}
