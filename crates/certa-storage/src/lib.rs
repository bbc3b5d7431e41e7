//! # certa-storage — Key-Value Persistence
//!
//! String-keyed, string-valued persistent storage behind the
//! [`KeyValueStore`] trait — the same contract the browser-local storage
//! of earlier versions provided. Two backends:
//!
//! - **`MemoryStore`** (`memory.rs`): map-backed, for tests and ephemeral
//!   sessions.
//! - **`FileStore`** (`file.rs`): directory-rooted, one file per key
//!   (`client:0123456789` → `<root>/client/0123456789.json`).
//!
//! The `keys` module owns the key namespace: canonical `client:<taxId>` /
//! `progress:<taxId>` builders plus the full legacy-variant set a deletion
//! must sweep.
//!
//! ## Invariant
//!
//! Removal is idempotent — deleting an absent key is a no-op, never an
//! error. Client deletion depends on this: the legacy sweep removes keys
//! most clients never had.

pub mod file;
pub mod keys;
pub mod memory;
pub mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{KeyValueStore, StorageError};
