//! # Pagination Engine
//!
//! A clamped page counter over the active item list, sliced into
//! fixed-size pages. Transitions never wrap: `next()` at the last page and
//! `prev()` at the first are no-ops, and `go_to()` clamps any requested
//! page into range.
//!
//! ## Invariant
//!
//! `1 <= current_page <= max(1, total_pages)` after every operation.
//! The save-on-leave rule (flush the visible slice before the counter
//! changes) is enforced one level up, in `SessionContext` — the engine
//! itself is pure page arithmetic.

use serde::{Deserialize, Serialize};

/// Checklist items shown per page.
pub const PAGE_SIZE: usize = 2;

/// Fixed-size pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
}

impl Pagination {
    /// Pagination at page 1 with the standard page size.
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    /// Pagination at page 1 with a custom page size (minimum 1).
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// The current page, 1-based.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for an item count. An empty list still has one
    /// (empty) page so the current-page invariant keeps a value to hold.
    pub fn total_pages(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.page_size).max(1)
    }

    /// Jump to a page, clamping into `1..=total_pages`.
    ///
    /// Returns whether the current page changed.
    pub fn go_to(&mut self, page: usize, item_count: usize) -> bool {
        let clamped = page.clamp(1, self.total_pages(item_count));
        let changed = clamped != self.current_page;
        self.current_page = clamped;
        changed
    }

    /// Advance one page; no-op at the last page.
    pub fn next(&mut self, item_count: usize) -> bool {
        if self.current_page < self.total_pages(item_count) {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; no-op at page 1.
    pub fn prev(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Reset to page 1 (on client or scheme switch).
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Half-open index bounds of the current page's slice.
    pub fn page_bounds(&self, item_count: usize) -> (usize, usize) {
        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(item_count);
        (start.min(end), end)
    }

    /// The page a 0-based item index lives on.
    pub fn page_for_index(&self, index: usize) -> usize {
        index / self.page_size + 1
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_at_page_one() {
        assert_eq!(Pagination::new().current_page(), 1);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let p = Pagination::new();
        assert_eq!(p.total_pages(5), 3);
        assert_eq!(p.total_pages(4), 2);
        assert_eq!(p.total_pages(1), 1);
        assert_eq!(p.total_pages(0), 1);
    }

    #[test]
    fn test_go_to_clamps_high_and_low() {
        let mut p = Pagination::new();
        p.go_to(10, 5);
        assert_eq!(p.current_page(), 3);
        p.go_to(0, 5);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_next_stops_at_last_page() {
        let mut p = Pagination::new();
        assert!(p.next(5));
        assert!(p.next(5));
        assert_eq!(p.current_page(), 3);
        assert!(!p.next(5));
        assert_eq!(p.current_page(), 3);
    }

    #[test]
    fn test_prev_stops_at_first_page() {
        let mut p = Pagination::new();
        assert!(!p.prev());
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_page_bounds() {
        let mut p = Pagination::new();
        assert_eq!(p.page_bounds(5), (0, 2));
        p.next(5);
        assert_eq!(p.page_bounds(5), (2, 4));
        p.next(5);
        assert_eq!(p.page_bounds(5), (4, 5));
    }

    #[test]
    fn test_page_for_index() {
        let p = Pagination::new();
        assert_eq!(p.page_for_index(0), 1);
        assert_eq!(p.page_for_index(1), 1);
        assert_eq!(p.page_for_index(2), 2);
        assert_eq!(p.page_for_index(4), 3);
    }

    #[test]
    fn test_reset() {
        let mut p = Pagination::new();
        p.go_to(3, 5);
        p.reset();
        assert_eq!(p.current_page(), 1);
    }

    proptest! {
        /// Page slices are disjoint, ordered, and cover the item list.
        #[test]
        fn prop_slices_partition_items(item_count in 0usize..200, page_size in 1usize..10) {
            let mut p = Pagination::with_page_size(page_size);
            let mut covered = 0;
            for page in 1..=p.total_pages(item_count) {
                p.go_to(page, item_count);
                let (start, end) = p.page_bounds(item_count);
                prop_assert_eq!(start, covered);
                prop_assert!(end >= start);
                covered = end;
            }
            prop_assert_eq!(covered, item_count);
        }

        /// The current-page invariant holds after arbitrary operations.
        #[test]
        fn prop_current_page_stays_in_range(
            item_count in 0usize..50,
            ops in proptest::collection::vec(0usize..40, 0..30),
        ) {
            let mut p = Pagination::new();
            for op in ops {
                match op % 3 {
                    0 => { p.next(item_count); }
                    1 => { p.prev(); }
                    _ => { p.go_to(op, item_count); }
                }
                prop_assert!(p.current_page() >= 1);
                prop_assert!(p.current_page() <= p.total_pages(item_count));
            }
        }
    }
}
