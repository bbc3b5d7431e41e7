//! Storage trait and error type.

use thiserror::Error;

/// Error from a storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The key is not usable by this backend.
    #[error("invalid storage key {key:?}: {reason}")]
    InvalidKey {
        /// The rejected key.
        key: String,
        /// Why the backend rejected it.
        reason: String,
    },

    /// Underlying IO failure.
    #[error("storage io error for key {key:?}: {source}")]
    Io {
        /// The key being accessed when the failure occurred.
        key: String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// String-keyed, string-valued persistent storage.
///
/// The contract mirrors browser-local storage, which earlier versions of
/// the portal persisted into: `get` returns `None` for absent keys, `put`
/// overwrites unconditionally, and `remove` is idempotent.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, overwriting any previous value.
    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`. Absent keys are a no-op.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    /// Whether a value is stored under `key`.
    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }
}
