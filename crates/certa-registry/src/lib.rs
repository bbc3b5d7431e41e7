//! # certa-registry — Client Registry
//!
//! Maps a validated tax identifier to a client record and owns the record
//! lifecycle: creation (exactly one record per tax id), lookup,
//! last-modified touching after progress saves, and full deletion
//! including every legacy storage key the id ever owned.
//!
//! ## Ownership
//!
//! A client record and its progress state live and die together — deletion
//! removes both, so no orphaned progress blob can outlive its record.
//! The registry owns the storage backend; the session layer reaches
//! storage through it.

pub mod client;
pub mod registry;

pub use client::ClientRecord;
pub use registry::{ClientRegistry, RegistryError};
