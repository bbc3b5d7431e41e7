//! # certa-cli — Command Handlers
//!
//! Argument structs and handlers for the `certa` binary. Each invocation
//! opens the file-backed store under the data directory, performs one
//! operation, and persists before exiting — the CLI has no idle loop, so
//! edits save immediately rather than waiting on the debounce window.

use std::path::Path;

use anyhow::{bail, Context, Result};

use certa_catalog::Catalog;
use certa_core::TaxId;
use certa_registry::ClientRegistry;
use certa_session::SessionContext;
use certa_storage::FileStore;

pub mod checklist;
pub mod client;
pub mod export;

/// Open the registry over the file store rooted at `data_dir`.
pub fn open_registry(data_dir: &Path) -> ClientRegistry<FileStore> {
    tracing::debug!(path = %data_dir.display(), "opening data directory");
    ClientRegistry::new(FileStore::new(data_dir))
}

/// Parse a tax id argument with an inline-friendly message.
pub fn parse_tax_id(input: &str) -> Result<TaxId> {
    TaxId::parse(input).with_context(|| format!("invalid tax id {input:?}"))
}

/// Open a session for a client, translating "not found" into the
/// actionable hint.
pub fn open_session(
    data_dir: &Path,
    catalog: &Catalog,
    tax_id: &TaxId,
) -> Result<SessionContext<FileStore>> {
    let registry = open_registry(data_dir);
    match SessionContext::load(registry, catalog, tax_id) {
        Ok(session) => Ok(session),
        Err(certa_session::SessionError::Registry(
            certa_registry::RegistryError::NotFound { tax_id },
        )) => {
            bail!("client {tax_id} not found — use `certa client create` to create it")
        }
        Err(e) => Err(e.into()),
    }
}
