//! # File-Backed Storage
//!
//! Directory-rooted store with one file per key. The namespace segment of
//! the key becomes a subdirectory and the remainder the filename:
//! `client:0123456789` → `<root>/client/0123456789.json`.
//!
//! ## Key Safety
//!
//! Key segments are restricted to ASCII alphanumerics, `-`, `_`, and `.`
//! (with `.` and `..` as whole segments rejected), so a key can never
//! escape the store root. In practice every key the workspace builds is a
//! known namespace plus a validated 10-digit tax id.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::store::{KeyValueStore, StorageError};

/// A file-per-key store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Root directory of the store (e.g. `./certa-data`).
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory of this store.
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Compute the filesystem path for a key.
    fn key_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let mut path = self.root.clone();
        for segment in key.split(':') {
            if segment.is_empty() || segment == "." || segment == ".." {
                return Err(StorageError::InvalidKey {
                    key: key.to_string(),
                    reason: "empty or relative path segment".to_string(),
                });
            }
            if let Some(bad) = segment
                .chars()
                .find(|c| !c.is_ascii_alphanumeric() && !matches!(c, '-' | '_' | '.'))
            {
                return Err(StorageError::InvalidKey {
                    key: key.to_string(),
                    reason: format!("character {bad:?} not allowed in key segment"),
                });
            }
            path.push(segment);
        }
        path.set_extension("json");
        Ok(path)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.key_path(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                key: key.to_string(),
                source,
            })?;
        }
        fs::write(&path, value).map_err(|source| StorageError::Io {
            key: key.to_string(),
            source,
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_get_absent_is_none() {
        let (_dir, store) = store();
        assert_eq!(store.get("client:1234567890").unwrap(), None);
    }

    #[test]
    fn test_put_then_get_roundtrip() {
        let (_dir, mut store) = store();
        store.put("client:1234567890", r#"{"name":"Acme"}"#).unwrap();
        assert_eq!(
            store.get("client:1234567890").unwrap().as_deref(),
            Some(r#"{"name":"Acme"}"#)
        );
    }

    #[test]
    fn test_key_maps_to_namespaced_path() {
        let (dir, mut store) = store();
        store.put("progress:1234567890", "{}").unwrap();
        assert!(dir.path().join("progress").join("1234567890.json").is_file());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, mut store) = store();
        store.put("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_traversal_key_rejected() {
        let (_dir, mut store) = store();
        assert!(store.put("..:escape", "v").is_err());
        assert!(store.get("client:../escape").is_err());
        assert!(store.put("client:", "v").is_err());
    }

    #[test]
    fn test_put_overwrites() {
        let (_dir, mut store) = store();
        store.put("client:1234567890", "a").unwrap();
        store.put("client:1234567890", "b").unwrap();
        assert_eq!(store.get("client:1234567890").unwrap().as_deref(), Some("b"));
    }
}
