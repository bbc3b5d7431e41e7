//! # Registry Operations
//!
//! Create, find, touch, and delete client records against a key-value
//! store. Exactly one record exists per tax id; creation over an existing
//! record is rejected rather than overwritten.
//!
//! A present-but-unreadable client blob is surfaced as an error instead of
//! being treated as absent — reporting `NotFound` there would steer the
//! caller into a `create` that strands the stored progress under a
//! replaced record.

use thiserror::Error;
use tracing::{debug, warn};

use certa_catalog::{Catalog, SchemeKey};
use certa_core::{TaxId, Timestamp};
use certa_storage::keys;
use certa_storage::{KeyValueStore, StorageError};

use crate::client::ClientRecord;

/// Errors from registry operations. All non-fatal.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Malformed or missing required input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No record exists for the tax id.
    #[error("client {tax_id} not found")]
    NotFound {
        /// The searched identifier.
        tax_id: TaxId,
    },

    /// A record already exists for the tax id.
    #[error("client {tax_id} already exists")]
    AlreadyExists {
        /// The conflicting identifier.
        tax_id: TaxId,
    },

    /// The stored record exists but cannot be decoded.
    #[error("stored record for client {tax_id} is unreadable: {reason}")]
    CorruptRecord {
        /// The identifier whose blob failed to decode.
        tax_id: TaxId,
        /// Decoder diagnostic.
        reason: String,
    },

    /// Storage backend failure.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// The client registry, owning the storage backend.
#[derive(Debug)]
pub struct ClientRegistry<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ClientRegistry<S> {
    /// Create a registry over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutably borrow the underlying store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consume the registry, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Look up the record for a tax id.
    ///
    /// # Errors
    ///
    /// `NotFound` when no record is stored; `CorruptRecord` when a blob is
    /// present but undecodable.
    pub fn find(&self, tax_id: &TaxId) -> Result<ClientRecord, RegistryError> {
        let blob = self
            .store
            .get(&keys::client_key(tax_id))?
            .ok_or_else(|| RegistryError::NotFound {
                tax_id: tax_id.clone(),
            })?;
        serde_json::from_str(&blob).map_err(|e| RegistryError::CorruptRecord {
            tax_id: tax_id.clone(),
            reason: e.to_string(),
        })
    }

    /// Create a new client record.
    ///
    /// Sets `created_at = last_modified = now`, persists the record, and
    /// leaves the progress state empty.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` if a record is present for the tax id;
    /// `InvalidInput` if the trimmed name is empty or the scheme key is
    /// not in the catalog.
    pub fn create(
        &mut self,
        tax_id: &TaxId,
        name: &str,
        scheme_key: &SchemeKey,
        catalog: &Catalog,
    ) -> Result<ClientRecord, RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::InvalidInput(
                "client name must not be empty".to_string(),
            ));
        }
        if !catalog.contains(scheme_key) {
            return Err(RegistryError::InvalidInput(format!(
                "unknown certification scheme: {scheme_key}"
            )));
        }
        if self.store.contains(&keys::client_key(tax_id))? {
            return Err(RegistryError::AlreadyExists {
                tax_id: tax_id.clone(),
            });
        }

        let now = Timestamp::now();
        let record = ClientRecord {
            tax_id: tax_id.clone(),
            name: name.to_string(),
            scheme_key: scheme_key.clone(),
            created_at: now,
            last_modified: now,
        };
        self.persist(&record)?;
        debug!(tax_id = %tax_id, scheme = %scheme_key, "client record created");
        Ok(record)
    }

    /// Update `last_modified` to now and persist. Called after any
    /// progress flush.
    pub fn touch(&mut self, tax_id: &TaxId) -> Result<ClientRecord, RegistryError> {
        let mut record = self.find(tax_id)?;
        record.last_modified = Timestamp::now();
        self.persist(&record)?;
        Ok(record)
    }

    /// Remove the record and ALL associated progress keys, legacy
    /// variants included. Idempotent — deleting an absent client is a
    /// no-op.
    pub fn delete(&mut self, tax_id: &TaxId) -> Result<(), RegistryError> {
        if !self.store.contains(&keys::client_key(tax_id))? {
            warn!(tax_id = %tax_id, "delete of absent client; sweeping keys anyway");
        }
        for key in keys::deletion_keys(tax_id) {
            self.store.remove(&key)?;
        }
        debug!(tax_id = %tax_id, "client and associated state removed");
        Ok(())
    }

    fn persist(&mut self, record: &ClientRecord) -> Result<(), RegistryError> {
        let blob = serde_json::to_string(record).map_err(|e| RegistryError::CorruptRecord {
            tax_id: record.tax_id.clone(),
            reason: e.to_string(),
        })?;
        self.store
            .put(&keys::client_key(&record.tax_id), &blob)?;
        Ok(())
    }
}
