//! `certa item` and `certa show` — checklist editing and display.

use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use certa_catalog::Catalog;
use certa_core::ApprovalLabel;

use crate::{open_session, parse_tax_id};

/// Checklist item editing.
#[derive(Args, Debug)]
pub struct ItemArgs {
    #[command(subcommand)]
    pub command: ItemCommand,
}

#[derive(Subcommand, Debug)]
pub enum ItemCommand {
    /// Set the approval and/or evidence of one item.
    Set {
        /// 10-digit tax id.
        tax_id: String,
        /// Item id within the client's scheme.
        item_id: u32,
        /// Approval label: "Aprobado", "No aprobado", "No aplica",
        /// or "-" to clear.
        #[arg(long)]
        approval: Option<String>,
        /// Evidence text (sanitized on write; empty clears).
        #[arg(long)]
        evidence: Option<String>,
    },
    /// Remove the evidence of every item, keeping approvals.
    ClearEvidence {
        /// 10-digit tax id.
        tax_id: String,
    },
}

/// Page display.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// 10-digit tax id.
    pub tax_id: String,
    /// Page to show (clamped into range; default 1).
    #[arg(long)]
    pub page: Option<usize>,
    /// Also print the sidebar projection.
    #[arg(long)]
    pub sidebar: bool,
}

/// Dispatch a `certa item` invocation.
pub fn run_item(args: ItemArgs, data_dir: &Path) -> Result<()> {
    let catalog = Catalog::builtin();
    match args.command {
        ItemCommand::Set {
            tax_id,
            item_id,
            approval,
            evidence,
        } => {
            if approval.is_none() && evidence.is_none() {
                bail!("nothing to set — pass --approval and/or --evidence");
            }
            let tax_id = parse_tax_id(&tax_id)?;
            let mut session = open_session(data_dir, &catalog, &tax_id)?;
            let now = Instant::now();

            if let Some(raw) = approval {
                let label = match raw.as_str() {
                    "-" => None,
                    other => Some(
                        ApprovalLabel::parse(other)
                            .context("expected \"Aprobado\", \"No aprobado\", \"No aplica\", or \"-\"")?,
                    ),
                };
                session.set_approval(item_id, label, now)?;
            }
            if let Some(raw) = &evidence {
                session.set_evidence(item_id, raw, now)?;
            }
            session.save()?;

            println!(
                "item {item_id}: status {}",
                session.progress().status(item_id)
            );
            Ok(())
        }
        ItemCommand::ClearEvidence { tax_id } => {
            let tax_id = parse_tax_id(&tax_id)?;
            let mut session = open_session(data_dir, &catalog, &tax_id)?;
            session.clear_evidence()?;
            println!("evidence cleared for all items of client {tax_id}");
            Ok(())
        }
    }
}

/// Dispatch a `certa show` invocation.
pub fn run_show(args: ShowArgs, data_dir: &Path) -> Result<()> {
    let catalog = Catalog::builtin();
    let tax_id = parse_tax_id(&args.tax_id)?;
    let mut session = open_session(data_dir, &catalog, &tax_id)?;
    if let Some(page) = args.page {
        session.go_to_page(page)?;
    }

    let record = session.record();
    println!(
        "{} ({}) — {}",
        record.name,
        record.tax_id,
        catalog.display_name(&record.scheme_key)
    );

    let pagination = *session.pagination();
    let total_pages = pagination.total_pages(session.items().len());
    println!("page {}/{}", pagination.current_page(), total_pages);

    let (start, _) = pagination.page_bounds(session.items().len());
    for (offset, item) in session.visible_items().iter().enumerate() {
        let status = session.progress().status(item.id);
        println!("  {}. [{}] {}", start + offset + 1, status, item.prompt);
        println!("     expected: {}", item.expectation);
        match session.progress().evidence(item.id) {
            Some(evidence) => println!("     evidence: {evidence}"),
            None => println!("     evidence: (none)"),
        }
    }

    let totals = session.totals();
    println!(
        "progress: {}/{} completed ({}%) — {} approved, {} rejected, {} n/a",
        totals.completed,
        totals.total,
        totals.percent(),
        totals.approved,
        totals.rejected,
        totals.not_applicable
    );

    if args.sidebar {
        let view = session.sidebar(None);
        println!("sidebar ({:?}, showing {}):", view.mode, view.entries.len());
        for entry in &view.entries {
            let marker = if entry.on_current_page { '>' } else { ' ' };
            println!(
                " {marker} {:>2}. [{}] p{} {}",
                entry.position, entry.status, entry.page, entry.prompt
            );
        }
        if let Some(toggle) = view.toggle {
            println!("  ... toggle to {:?} ({} items)", toggle.target_mode, toggle.item_count);
        }
    }
    Ok(())
}
