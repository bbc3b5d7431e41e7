//! # certa-progress — Progress State Store
//!
//! The in-memory mapping from typed field key to value for the active
//! client, and everything that guards it: evidence sanitization, derived
//! per-item status, aggregate totals, storage round-tripping, and the
//! debounced flush deadline.
//!
//! ## Single Source of Truth
//!
//! One `ProgressState` holds every page's fields for the whole session.
//! Page navigation writes into the same map, so a flush always persists
//! the complete picture — a partial page save can never clobber another
//! page's keys, because there is no per-page document to overwrite.
//!
//! ## Degradation
//!
//! Loading tolerates everything: a missing blob, a corrupt blob, stale
//! field keys from a previous scheme, and the legacy key spellings of
//! earlier schema versions. Loss of one saved blob must not block the
//! rest of the session, so load failures become an empty state and a
//! warning, never an error.

pub mod debounce;
pub mod sanitize;
pub mod state;

pub use debounce::FlushTimer;
pub use sanitize::sanitize_evidence;
pub use state::{ProgressError, ProgressState, ProgressTotals};
