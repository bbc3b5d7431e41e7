//! # Session Context
//!
//! One `SessionContext` per open client. It owns everything the session
//! mutates — the client record, the resolved item list, the progress map,
//! the pagination state, the sidebar mode, and the debounce timer — and it
//! owns the registry (and through it the store) while loaded.
//!
//! ## Lifecycle
//!
//! `load` resolves the record and scheme, reads progress (degrading to
//! empty on corruption), and starts at page 1. `unload` cancels any
//! pending debounced flush and hands the registry back — a switched-away
//! client never receives a late stale write. `finalize` cancels, deletes
//! the record and every progress key, and consumes the session.
//!
//! ## Ordering
//!
//! Edits apply in call order. Page navigation flushes synchronously
//! *before* the page counter changes, so leaving a page can never lose
//! its edits; the debounced path coalesces edits in between.

use std::time::Instant;

use thiserror::Error;
use tracing::debug;

use certa_catalog::{Catalog, ChecklistItem};
use certa_core::{ApprovalLabel, TaxId};
use certa_progress::{FlushTimer, ProgressError, ProgressState, ProgressTotals};
use certa_registry::{ClientRecord, ClientRegistry, RegistryError};
use certa_storage::KeyValueStore;

use crate::pagination::Pagination;
use crate::sidebar::{self, SidebarLayout, SidebarMode, SidebarView};

/// Errors from session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Registry-level failure (lookup, touch, delete).
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Progress flush failure.
    #[error(transparent)]
    Progress(#[from] ProgressError),

    /// The item id is not part of the active scheme.
    #[error("item {item_id} is not in the active checklist")]
    UnknownItem {
        /// The rejected item id.
        item_id: u32,
    },
}

/// The state of one open client session.
#[derive(Debug)]
pub struct SessionContext<S: KeyValueStore> {
    registry: ClientRegistry<S>,
    record: ClientRecord,
    items: Vec<ChecklistItem>,
    progress: ProgressState,
    pagination: Pagination,
    sidebar_mode: SidebarMode,
    timer: FlushTimer,
}

impl<S: KeyValueStore> SessionContext<S> {
    /// Open a session for a client.
    ///
    /// Resolves the stored scheme key against the catalog (falling back to
    /// the legacy item list when it no longer resolves), loads progress
    /// (missing or corrupt blobs degrade to empty), and resets to page 1.
    pub fn load(
        registry: ClientRegistry<S>,
        catalog: &Catalog,
        tax_id: &TaxId,
    ) -> Result<Self, SessionError> {
        let record = registry.find(tax_id)?;
        let items = catalog.resolve(&record.scheme_key).to_vec();
        let progress = ProgressState::load(registry.store(), tax_id);
        debug!(
            tax_id = %tax_id,
            scheme = %record.scheme_key,
            items = items.len(),
            fields = progress.len(),
            "session loaded"
        );
        Ok(Self {
            registry,
            record,
            items,
            progress,
            pagination: Pagination::new(),
            sidebar_mode: SidebarMode::default(),
            timer: FlushTimer::new(),
        })
    }

    /// Open a session with a custom debounce timer.
    pub fn load_with_timer(
        registry: ClientRegistry<S>,
        catalog: &Catalog,
        tax_id: &TaxId,
        timer: FlushTimer,
    ) -> Result<Self, SessionError> {
        let mut session = Self::load(registry, catalog, tax_id)?;
        session.timer = timer;
        Ok(session)
    }

    // ─── Read access ─────────────────────────────────────────────────

    /// The loaded client record.
    pub fn record(&self) -> &ClientRecord {
        &self.record
    }

    /// The resolved item list of the active scheme.
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// The progress field map.
    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    /// The pagination state.
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// The items on the current page.
    pub fn visible_items(&self) -> &[ChecklistItem] {
        let (start, end) = self.pagination.page_bounds(self.items.len());
        &self.items[start..end]
    }

    /// Aggregate totals over the active item list.
    pub fn totals(&self) -> ProgressTotals {
        self.progress.totals(self.item_ids())
    }

    /// Whether an edit is waiting on the debounce window.
    pub fn has_pending_flush(&self) -> bool {
        self.timer.is_armed()
    }

    // ─── Edits ───────────────────────────────────────────────────────

    /// Set or clear the approval verdict of a visible item.
    ///
    /// Arms the debounced flush; `now` is the event arrival time.
    pub fn set_approval(
        &mut self,
        item_id: u32,
        label: Option<ApprovalLabel>,
        now: Instant,
    ) -> Result<(), SessionError> {
        self.require_item(item_id)?;
        self.progress.set_approval(item_id, label);
        self.timer.schedule(now);
        Ok(())
    }

    /// Store evidence markup for a visible item (sanitized on write).
    ///
    /// Arms the debounced flush; `now` is the event arrival time.
    pub fn set_evidence(
        &mut self,
        item_id: u32,
        raw_markup: &str,
        now: Instant,
    ) -> Result<(), SessionError> {
        self.require_item(item_id)?;
        self.progress.set_evidence(item_id, raw_markup);
        self.timer.schedule(now);
        Ok(())
    }

    /// Remove the evidence of every item in the active scheme and persist
    /// immediately.
    pub fn clear_evidence(&mut self) -> Result<(), SessionError> {
        let ids: Vec<u32> = self.item_ids().collect();
        self.progress.clear_evidence(ids);
        self.flush_now()
    }

    // ─── Navigation (save-on-leave) ──────────────────────────────────

    /// Jump to a page, clamped into range. Flushes the in-memory edits
    /// before the page counter changes.
    pub fn go_to_page(&mut self, page: usize) -> Result<usize, SessionError> {
        self.flush_now()?;
        self.pagination.go_to(page, self.items.len());
        Ok(self.pagination.current_page())
    }

    /// Advance one page (no wrap). Flushes before moving.
    pub fn next_page(&mut self) -> Result<usize, SessionError> {
        self.flush_now()?;
        self.pagination.next(self.items.len());
        Ok(self.pagination.current_page())
    }

    /// Go back one page (no wrap). Flushes before moving.
    pub fn prev_page(&mut self) -> Result<usize, SessionError> {
        self.flush_now()?;
        self.pagination.prev();
        Ok(self.pagination.current_page())
    }

    /// Navigate to the page containing a 0-based item index (sidebar
    /// click-through). Scrolling the item into view is the presentation
    /// layer's side of the contract.
    pub fn go_to_item(&mut self, index: usize) -> Result<usize, SessionError> {
        self.go_to_page(self.pagination.page_for_index(index))
    }

    // ─── Persistence ─────────────────────────────────────────────────

    /// Persist immediately and clear any pending debounce.
    pub fn save(&mut self) -> Result<(), SessionError> {
        self.flush_now()
    }

    /// Flush if the debounce deadline has passed. Returns whether a flush
    /// happened.
    pub fn maybe_flush(&mut self, now: Instant) -> Result<bool, SessionError> {
        if self.timer.take_due(now) {
            self.flush_now()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    // ─── Sidebar ─────────────────────────────────────────────────────

    /// The active sidebar mode.
    pub fn sidebar_mode(&self) -> SidebarMode {
        self.sidebar_mode
    }

    /// Switch between the first-N and remaining views.
    pub fn toggle_sidebar_mode(&mut self) {
        self.sidebar_mode = self.sidebar_mode.toggled();
    }

    /// Project the sidebar for the current state.
    pub fn sidebar(&self, layout: Option<SidebarLayout>) -> SidebarView {
        sidebar::project(
            &self.items,
            &self.progress,
            &self.pagination,
            layout,
            self.sidebar_mode,
        )
    }

    // ─── Lifecycle ───────────────────────────────────────────────────

    /// Close the session without persisting pending edits.
    ///
    /// Cancels the debounced flush — after a client switch, nothing may
    /// write this client's state — and returns the registry for the next
    /// session.
    pub fn unload(mut self) -> ClientRegistry<S> {
        self.timer.cancel();
        debug!(tax_id = %self.record.tax_id, "session unloaded");
        self.registry
    }

    /// Delete the client and all associated state, consuming the session.
    ///
    /// The pending flush is canceled first so nothing resurrects a key
    /// after the sweep.
    pub fn finalize(mut self) -> Result<ClientRegistry<S>, SessionError> {
        self.timer.cancel();
        let tax_id = self.record.tax_id.clone();
        self.registry.delete(&tax_id)?;
        Ok(self.registry)
    }

    // ─── Internals ───────────────────────────────────────────────────

    fn item_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.items.iter().map(|item| item.id)
    }

    fn require_item(&self, item_id: u32) -> Result<(), SessionError> {
        if self.items.iter().any(|item| item.id == item_id) {
            Ok(())
        } else {
            Err(SessionError::UnknownItem { item_id })
        }
    }

    fn flush_now(&mut self) -> Result<(), SessionError> {
        self.timer.cancel();
        self.progress
            .flush(self.registry.store_mut(), &self.record.tax_id)?;
        self.record = self.registry.touch(&self.record.tax_id)?;
        Ok(())
    }
}
