//! # Sidebar Summary Projector
//!
//! A pure projection of the whole item list into the compact navigation
//! view: per-item derived status, the page each item lives on, and whether
//! that page is the one currently open. Recomputed after every mutation;
//! nothing here is stored.
//!
//! ## Adaptive Visible Count
//!
//! The sidebar shows as many items as fit the measured layout, bounded to
//! `3..=15`, with a fixed default of 6 when no measurements are available
//! (headless or not yet laid out). Items beyond the visible count are
//! reachable through the toggle: exactly one of "first N" or "remaining"
//! is shown at a time.

use serde::{Deserialize, Serialize};

use certa_catalog::ChecklistItem;
use certa_core::ItemStatus;
use certa_progress::ProgressState;

use crate::pagination::Pagination;

/// Estimated rendered height of one sidebar entry, in pixels.
const ITEM_HEIGHT: u32 = 65;
/// Height reserved for the toggle arrow.
const TOGGLE_HEIGHT: u32 = 80;
/// Margin below the sidebar header.
const MENU_MARGIN: u32 = 20;
/// Header height assumed when unmeasured.
const DEFAULT_HEADER_HEIGHT: u32 = 80;

/// Visible count when no layout measurements are available.
pub const DEFAULT_VISIBLE: usize = 6;
/// Lower bound of the adaptive visible count.
pub const MIN_VISIBLE: usize = 3;
/// Upper bound of the adaptive visible count.
pub const MAX_VISIBLE: usize = 15;

/// Measured layout inputs for the adaptive count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarLayout {
    /// Height of the sidebar content area, in pixels.
    pub content_height: u32,
    /// Measured header height; `None` assumes the default.
    pub header_height: Option<u32>,
}

/// How many items fit the measured layout, clamped to `3..=15`.
///
/// `None` (no measurements) returns the fixed default of 6.
pub fn visible_count(layout: Option<SidebarLayout>) -> usize {
    let Some(layout) = layout else {
        return DEFAULT_VISIBLE;
    };
    let header = layout.header_height.unwrap_or(DEFAULT_HEADER_HEIGHT);
    let available = layout
        .content_height
        .saturating_sub(header)
        .saturating_sub(MENU_MARGIN)
        .saturating_sub(TOGGLE_HEIGHT);
    let fits = (available / ITEM_HEIGHT) as usize;
    fits.clamp(MIN_VISIBLE, MAX_VISIBLE)
}

/// The two mutually exclusive sidebar views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SidebarMode {
    /// The first N items that fit.
    #[default]
    FirstItems,
    /// The items beyond the first N.
    RemainingItems,
}

impl SidebarMode {
    /// The other mode. Toggling is the only mode transition.
    pub fn toggled(self) -> Self {
        match self {
            Self::FirstItems => Self::RemainingItems,
            Self::RemainingItems => Self::FirstItems,
        }
    }
}

/// One projected sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    /// 0-based index into the full item list.
    pub index: usize,
    /// The item's scheme-scoped id.
    pub item_id: u32,
    /// 1-based display position.
    pub position: usize,
    /// Item prompt, for the entry label.
    pub prompt: String,
    /// Derived status, for the entry's color class.
    pub status: ItemStatus,
    /// The page this item lives on.
    pub page: usize,
    /// Whether that page is currently open.
    pub on_current_page: bool,
}

/// The toggle control shown when not every item fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarToggle {
    /// Mode the toggle switches to.
    pub target_mode: SidebarMode,
    /// Number of items the label advertises ("Ver N puntos más" /
    /// "Ver primeros N puntos").
    pub item_count: usize,
}

/// The projected sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarView {
    /// Mode this view was projected in.
    pub mode: SidebarMode,
    /// Adaptive visible count used for the split.
    pub visible_count: usize,
    /// Entries in display order.
    pub entries: Vec<SidebarEntry>,
    /// Present only when the item list exceeds the visible count.
    pub toggle: Option<SidebarToggle>,
}

/// Project the sidebar view for the current state.
pub fn project(
    items: &[ChecklistItem],
    progress: &ProgressState,
    pagination: &Pagination,
    layout: Option<SidebarLayout>,
    mode: SidebarMode,
) -> SidebarView {
    let visible = visible_count(layout);
    let overflow = items.len() > visible;

    let (range, toggle) = match mode {
        SidebarMode::FirstItems => {
            let shown = visible.min(items.len());
            let toggle = overflow.then_some(SidebarToggle {
                target_mode: SidebarMode::RemainingItems,
                item_count: items.len() - visible,
            });
            (0..shown, toggle)
        }
        SidebarMode::RemainingItems => {
            let start = visible.min(items.len());
            let toggle = overflow.then_some(SidebarToggle {
                target_mode: SidebarMode::FirstItems,
                item_count: visible,
            });
            (start..items.len(), toggle)
        }
    };

    let entries = range
        .map(|index| {
            let item = &items[index];
            let page = pagination.page_for_index(index);
            SidebarEntry {
                index,
                item_id: item.id,
                position: index + 1,
                prompt: item.prompt.clone(),
                status: progress.status(item.id),
                page,
                on_current_page: page == pagination.current_page(),
            }
        })
        .collect();

    SidebarView {
        mode,
        visible_count: visible,
        entries,
        toggle,
    }
}
