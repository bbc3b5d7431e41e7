//! # certa-session — Session Context, Pagination, Sidebar
//!
//! The stateful heart of the tracker. Earlier versions held the active
//! client, current page, and field map as ambient globals scattered across
//! the UI; here they live in one explicit [`SessionContext`] with a clear
//! load/unload lifecycle tied to client switches.
//!
//! ## Modules
//!
//! - **Pagination** (`pagination.rs`): clamped page counter over a
//!   fixed-size slicing of the active item list. No wrap-around; page 1
//!   after every load.
//!
//! - **Sidebar** (`sidebar.rs`): pure projection of all items into a
//!   compact status-colored navigation view, with an adaptive visible
//!   count and a first-N/remaining toggle.
//!
//! - **Session** (`session.rs`): `SessionContext` — owns the record, the
//!   resolved item list, the progress map, the pagination state, and the
//!   debounce timer. Every page navigation flushes before the page counter
//!   changes; unloading cancels the pending flush.

pub mod pagination;
pub mod session;
pub mod sidebar;

pub use pagination::{Pagination, PAGE_SIZE};
pub use session::{SessionContext, SessionError};
pub use sidebar::{
    visible_count, SidebarEntry, SidebarLayout, SidebarMode, SidebarToggle, SidebarView,
};
