//! # certa CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::path::PathBuf;

use clap::Parser;

/// Certa — certification checklist tracker.
///
/// Manages client records keyed by tax id, fills per-item compliance
/// checklists with approvals and evidence, and assembles export snapshots
/// for downstream document and summary renderers.
#[derive(Parser, Debug)]
#[command(name = "certa", version, about)]
struct Cli {
    /// Directory holding the file-backed store.
    #[arg(long, global = true, default_value = "certa-data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Client record management (search, create, finalize).
    Client(certa_cli::client::ClientArgs),
    /// Checklist item editing.
    Item(certa_cli::checklist::ItemArgs),
    /// Show a checklist page with statuses and totals.
    Show(certa_cli::checklist::ShowArgs),
    /// Export snapshot generation.
    Export(certa_cli::export::ExportArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Client(args) => certa_cli::client::run(args, &cli.data_dir),
        Commands::Item(args) => certa_cli::checklist::run_item(args, &cli.data_dir),
        Commands::Show(args) => certa_cli::checklist::run_show(args, &cli.data_dir),
        Commands::Export(args) => certa_cli::export::run(args, &cli.data_dir),
    }
}
