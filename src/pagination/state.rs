//! Per-gallery page state and slice arithmetic.

use std::ops::Range;

use super::errors::{PaginationError, PaginationResult};

/// Mutable pagination state owned by a single gallery.
///
/// `current_page` is 1-based and stays within `1..=total_pages()` whenever
/// there is at least one page. An empty state keeps `current_page == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl PageState {
    /// Create state positioned on the first page
    pub fn new(page_size: usize, total_items: usize) -> PaginationResult<Self> {
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }

        Ok(Self {
            current_page: 1,
            page_size,
            total_items,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// `ceil(total_items / page_size)`, zero for an empty source
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Zero-based half-open range of the items on the current page
    pub fn slice_bounds(&self) -> Range<usize> {
        compute_slice(self)
    }

    /// Replace the item count and rewind to the first page
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = 1;
    }

    /// Move to `page`, clamped into the valid range
    pub(crate) fn set_current_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }
}

/// Slice of the item source visible on the state's current page.
///
/// Always well-formed: `start <= end <= total_items`, and an empty source
/// yields `0..0`.
pub fn compute_slice(state: &PageState) -> Range<usize> {
    let start = ((state.current_page - 1) * state.page_size).min(state.total_items);
    let end = start.saturating_add(state.page_size).min(state.total_items);
    start..end
}
