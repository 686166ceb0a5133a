//! Condensed page-selector window (numbers with ellipses).

use std::fmt;

use serde::Serialize;

/// Galleries with at most this many pages list every page number.
pub const FULL_WINDOW_PAGES: usize = 7;

/// One entry of the navigation control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{}", page),
            Self::Ellipsis => f.write_str("…"),
        }
    }
}

/// Navigation tokens for `current` out of `total` pages.
///
/// Single-page and empty galleries get no tokens. Up to seven pages are all
/// listed; beyond that the first and last page frame the current page and its
/// neighbours, with an ellipsis on each side that has a gap. The sequence is
/// emitted as-is, without deduplication.
pub fn compute_window(current: usize, total: usize) -> Vec<PageToken> {
    if total <= 1 {
        return Vec::new();
    }

    if total <= FULL_WINDOW_PAGES {
        return (1..=total).map(PageToken::Page).collect();
    }

    let mut tokens = vec![PageToken::Page(1)];

    if current > 3 {
        tokens.push(PageToken::Ellipsis);
    }

    let low = current.saturating_sub(1).max(2);
    let high = current.saturating_add(1).min(total - 1);
    tokens.extend((low..=high).map(PageToken::Page));

    if current.saturating_add(2) < total {
        tokens.push(PageToken::Ellipsis);
    }

    tokens.push(PageToken::Page(total));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Ellipsis, Page};

    #[test]
    fn test_no_tokens_for_single_or_empty() {
        assert!(compute_window(1, 1).is_empty());
        assert!(compute_window(1, 0).is_empty());
    }

    #[test]
    fn test_small_gallery_lists_all_pages() {
        assert_eq!(
            compute_window(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert_eq!(compute_window(7, 7).len(), 7);
    }

    #[test]
    fn test_first_page_window() {
        // Page 1 has only page 2 as a neighbour, so 9 is hidden behind the ellipsis.
        assert_eq!(compute_window(1, 10), vec![Page(1), Page(2), Ellipsis, Page(10)]);
        assert_eq!(
            compute_window(2, 10),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_middle_window() {
        assert_eq!(
            compute_window(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_last_page_window() {
        assert_eq!(compute_window(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
    }

    #[test]
    fn test_ellipsis_thresholds() {
        assert_eq!(
            compute_window(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            compute_window(4, 10),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(
            compute_window(8, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_eight_pages() {
        assert_eq!(compute_window(1, 8), vec![Page(1), Page(2), Ellipsis, Page(8)]);
        assert_eq!(
            compute_window(6, 8),
            vec![Page(1), Ellipsis, Page(5), Page(6), Page(7), Page(8)]
        );
    }

    #[test]
    fn test_reference_catalog_window() {
        let tokens = compute_window(75, 150);
        assert_eq!(tokens.first(), Some(&Page(1)));
        assert_eq!(tokens.last(), Some(&Page(150)));
        assert_eq!(tokens.len(), 7);
    }

    #[test]
    fn test_display() {
        let rendered: Vec<String> =
            compute_window(5, 10).iter().map(|t| t.to_string()).collect();
        assert_eq!(rendered, ["1", "…", "4", "5", "6", "…", "10"]);
    }
}
