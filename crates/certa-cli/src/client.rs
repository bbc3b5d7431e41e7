//! `certa client` — search, create, finalize.

use std::path::Path;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use certa_catalog::{Catalog, SchemeKey};
use certa_registry::RegistryError;

use crate::{open_registry, parse_tax_id};

/// Client record management.
#[derive(Args, Debug)]
pub struct ClientArgs {
    #[command(subcommand)]
    pub command: ClientCommand,
}

#[derive(Subcommand, Debug)]
pub enum ClientCommand {
    /// Look up a client by tax id.
    Search {
        /// 10-digit tax id.
        tax_id: String,
    },
    /// Create a new client and start an empty checklist.
    Create {
        /// 10-digit tax id.
        tax_id: String,
        /// Client display name.
        #[arg(long)]
        name: String,
        /// Certification scheme key (see `certa client schemes`).
        #[arg(long)]
        scheme: String,
    },
    /// List the available certification schemes.
    Schemes,
    /// Delete a client and all of its progress, legacy keys included.
    Finalize {
        /// 10-digit tax id.
        tax_id: String,
    },
}

/// Dispatch a `certa client` invocation.
pub fn run(args: ClientArgs, data_dir: &Path) -> Result<()> {
    let catalog = Catalog::builtin();
    match args.command {
        ClientCommand::Search { tax_id } => {
            let tax_id = parse_tax_id(&tax_id)?;
            let registry = open_registry(data_dir);
            match registry.find(&tax_id) {
                Ok(record) => {
                    println!("client {}: {}", record.tax_id, record.name);
                    println!(
                        "  scheme: {} ({})",
                        catalog.display_name(&record.scheme_key),
                        record.scheme_key
                    );
                    println!("  created:       {}", record.created_at);
                    println!("  last modified: {}", record.last_modified);
                    Ok(())
                }
                Err(RegistryError::NotFound { tax_id }) => {
                    bail!("client {tax_id} not found — use `certa client create` to create it")
                }
                Err(e) => Err(e.into()),
            }
        }
        ClientCommand::Create {
            tax_id,
            name,
            scheme,
        } => {
            let tax_id = parse_tax_id(&tax_id)?;
            let mut registry = open_registry(data_dir);
            match registry.create(&tax_id, &name, &SchemeKey::new(scheme.as_str()), &catalog) {
                Ok(record) => {
                    println!(
                        "created client {} ({}) with scheme {}",
                        record.tax_id,
                        record.name,
                        catalog.display_name(&record.scheme_key)
                    );
                    Ok(())
                }
                Err(RegistryError::AlreadyExists { tax_id }) => {
                    bail!("client {tax_id} already exists — use `certa client search` to load it")
                }
                Err(e) => Err(e.into()),
            }
        }
        ClientCommand::Schemes => {
            for scheme in catalog.schemes() {
                println!(
                    "{:<18} {} — {} ({} items)",
                    scheme.key.as_str(),
                    scheme.display_name,
                    scheme.description,
                    scheme.item_count()
                );
            }
            Ok(())
        }
        ClientCommand::Finalize { tax_id } => {
            let tax_id = parse_tax_id(&tax_id)?;
            let mut registry = open_registry(data_dir);
            registry.delete(&tax_id)?;
            println!("client {tax_id} and all associated progress removed");
            Ok(())
        }
    }
}
