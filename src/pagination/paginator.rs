//! Command interface over a [`PageState`].

use std::ops::Range;

use tracing::debug;

use super::errors::{InvalidPageError, PaginationResult};
use super::label::format_range_label;
use super::state::PageState;
use super::window::{compute_window, PageToken};

/// Outcome of a navigation command, telling the caller whether to re-render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
    Moved { from: usize, to: usize },
    Unchanged,
}

impl PageChange {
    pub fn needs_render(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Pagination controller for one gallery
#[derive(Debug, Clone)]
pub struct Paginator {
    state: PageState,

    /// Noun used in the range label ("images", "results")
    noun: &'static str,
}

impl Paginator {
    pub fn new(
        page_size: usize,
        total_items: usize,
        noun: &'static str,
    ) -> PaginationResult<Self> {
        Ok(Self {
            state: PageState::new(page_size, total_items)?,
            noun,
        })
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.state.total_pages()
    }

    pub fn total_items(&self) -> usize {
        self.state.total_items()
    }

    pub fn slice_bounds(&self) -> Range<usize> {
        self.state.slice_bounds()
    }

    pub fn range_label(&self) -> String {
        let range = self.slice_bounds();
        format_range_label(range.start, range.end, self.state.total_items(), self.noun)
    }

    pub fn navigation_tokens(&self) -> Vec<PageToken> {
        compute_window(self.state.current_page(), self.state.total_pages())
    }

    pub fn can_go_previous(&self) -> bool {
        self.state.current_page() > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.state.current_page() < self.state.total_pages()
    }

    /// Whether the page-jump control accepts input at all
    pub fn jump_enabled(&self) -> bool {
        self.state.total_pages() > 0
    }

    /// Go to a specific 1-based page; out-of-range targets are rejected, not clamped
    pub fn go_to_page(&mut self, page: usize) -> Result<PageChange, InvalidPageError> {
        let total_pages = self.state.total_pages();
        if page < 1 || page > total_pages {
            return Err(InvalidPageError::OutOfRange { page, total_pages });
        }

        Ok(self.move_to(page))
    }

    /// Go to the previous page, doing nothing on the first page
    pub fn previous_page(&mut self) -> PageChange {
        if self.can_go_previous() {
            self.move_to(self.state.current_page() - 1)
        } else {
            PageChange::Unchanged
        }
    }

    /// Go to the next page, doing nothing on the last page
    pub fn next_page(&mut self) -> PageChange {
        if self.can_go_next() {
            self.move_to(self.state.current_page() + 1)
        } else {
            PageChange::Unchanged
        }
    }

    pub fn first_page(&mut self) -> PageChange {
        if self.jump_enabled() {
            self.move_to(1)
        } else {
            PageChange::Unchanged
        }
    }

    pub fn last_page(&mut self) -> PageChange {
        if self.jump_enabled() {
            self.move_to(self.state.total_pages())
        } else {
            PageChange::Unchanged
        }
    }

    /// Parse user input and go to that page.
    ///
    /// Leading digits are taken and trailing text ignored, so `"3rd"` jumps to
    /// page 3. Input without leading digits is rejected.
    pub fn jump_to_page(&mut self, raw_input: &str) -> Result<PageChange, InvalidPageError> {
        let total_pages = self.state.total_pages();
        let page = parse_page_number(raw_input).ok_or_else(|| InvalidPageError::NotANumber {
            input: raw_input.to_string(),
            total_pages,
        })?;

        self.go_to_page(page)
    }

    /// Replace the item count and rewind to the first page
    pub fn set_total_items(&mut self, total_items: usize) {
        debug!(
            "Resetting {} pagination: {} -> {} items",
            self.noun,
            self.state.total_items(),
            total_items
        );
        self.state.set_total_items(total_items);
    }

    fn move_to(&mut self, page: usize) -> PageChange {
        let from = self.state.current_page();
        if from == page {
            return PageChange::Unchanged;
        }

        self.state.set_current_page(page);
        debug!("{} page {} -> {}", self.noun, from, page);
        PageChange::Moved { from, to: page }
    }
}

/// Leading decimal digits of `input` after trimming and an optional `+`.
///
/// Overflowing values saturate and so fall out of range.
fn parse_page_number(input: &str) -> Option<usize> {
    let trimmed = input.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits_len == 0 {
        return None;
    }

    Some(unsigned[..digits_len].parse::<usize>().unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PageToken::{Ellipsis, Page};

    fn results(total: usize) -> Paginator {
        Paginator::new(20, total, "results").unwrap()
    }

    #[test]
    fn test_go_to_page() {
        let mut pager = results(200);
        assert_eq!(pager.go_to_page(4), Ok(PageChange::Moved { from: 1, to: 4 }));
        assert_eq!(pager.current_page(), 4);
        assert_eq!(pager.slice_bounds(), 60..80);
    }

    #[test]
    fn test_go_to_current_page_is_idempotent() {
        let mut pager = results(200);
        pager.go_to_page(3).unwrap();
        assert_eq!(pager.go_to_page(3), Ok(PageChange::Unchanged));
        assert_eq!(pager.current_page(), 3);
        assert_eq!(pager.slice_bounds(), 40..60);
    }

    #[test]
    fn test_go_to_page_rejects_out_of_range() {
        let mut pager = results(100);
        assert_eq!(
            pager.go_to_page(0),
            Err(InvalidPageError::OutOfRange { page: 0, total_pages: 5 })
        );
        assert_eq!(
            pager.go_to_page(6),
            Err(InvalidPageError::OutOfRange { page: 6, total_pages: 5 })
        );
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_go_to_page_on_empty_rejects_everything() {
        let mut pager = results(0);
        assert!(pager.go_to_page(1).is_err());
        assert!(!pager.jump_enabled());
    }

    #[test]
    fn test_previous_and_next_boundaries() {
        let mut pager = results(60);
        assert_eq!(pager.previous_page(), PageChange::Unchanged);
        assert_eq!(pager.current_page(), 1);

        assert!(pager.next_page().needs_render());
        assert!(pager.next_page().needs_render());
        assert_eq!(pager.current_page(), 3);
        assert_eq!(pager.next_page(), PageChange::Unchanged);
        assert_eq!(pager.current_page(), 3);

        assert_eq!(pager.previous_page(), PageChange::Moved { from: 3, to: 2 });
    }

    #[test]
    fn test_first_and_last_page() {
        let mut pager = results(3000);
        assert_eq!(pager.last_page(), PageChange::Moved { from: 1, to: 150 });
        assert_eq!(pager.first_page(), PageChange::Moved { from: 150, to: 1 });
        assert_eq!(results(0).last_page(), PageChange::Unchanged);
    }

    #[test]
    fn test_jump_to_page_rejects_text_and_out_of_range() {
        let mut pager = results(100);
        pager.go_to_page(2).unwrap();

        let err = pager.jump_to_page("abc").unwrap_err();
        assert!(matches!(err, InvalidPageError::NotANumber { .. }));
        assert_eq!(err.to_string(), "Please enter a page number between 1 and 5");
        assert_eq!(pager.current_page(), 2);

        let err = pager.jump_to_page("999").unwrap_err();
        assert_eq!(err, InvalidPageError::OutOfRange { page: 999, total_pages: 5 });
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn test_jump_to_page_parsing() {
        let mut pager = results(100);
        assert_eq!(pager.jump_to_page(" 4 "), Ok(PageChange::Moved { from: 1, to: 4 }));
        assert_eq!(pager.jump_to_page("+3"), Ok(PageChange::Moved { from: 4, to: 3 }));
        assert_eq!(pager.jump_to_page("5th"), Ok(PageChange::Moved { from: 3, to: 5 }));
        assert!(pager.jump_to_page("").is_err());
        assert!(pager.jump_to_page("-2").is_err());
        assert!(pager.jump_to_page("0").is_err());
        assert!(pager.jump_to_page("99999999999999999999999").is_err());
        assert_eq!(pager.current_page(), 5);
    }

    #[test]
    fn test_set_total_items_resets_and_labels() {
        let mut pager = results(100);
        pager.go_to_page(5).unwrap();
        pager.set_total_items(0);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.total_pages(), 0);
        assert_eq!(pager.range_label(), "Showing 1-0 of 0 results");
        assert!(pager.navigation_tokens().is_empty());
    }

    #[test]
    fn test_navigation_tokens_follow_current_page() {
        let mut pager = results(200);
        pager.go_to_page(5).unwrap();
        assert_eq!(
            pager.navigation_tokens(),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_huge_page_size_does_not_overflow() {
        let page_size = usize::MAX / 2 + 1;
        let mut pager = Paginator::new(page_size, usize::MAX, "results").unwrap();
        assert!(pager.next_page().needs_render());
        assert_eq!(pager.slice_bounds(), page_size..usize::MAX);
        assert_eq!(pager.next_page(), PageChange::Unchanged);
    }

    #[test]
    fn test_reference_label_noun() {
        let mut pager = Paginator::new(20, 3000, "images").unwrap();
        pager.go_to_page(150).unwrap();
        assert_eq!(pager.range_label(), "Showing 2981-3000 of 3000 images");
    }
}
