//! Human-readable range descriptions.

/// Noun used by the query results gallery
pub const RESULTS_NOUN: &str = "results";

/// `"Showing {start+1}-{end} of {total} {noun}"` for a zero-based `start..end`.
///
/// An empty source still produces a well-formed label ("Showing 1-0 of 0 ...").
pub fn format_range_label(start: usize, end: usize, total: usize, noun: &str) -> String {
    format!("Showing {}-{} of {} {}", start + 1, end, total, noun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_label() {
        assert_eq!(format_range_label(0, 20, 100, RESULTS_NOUN), "Showing 1-20 of 100 results");
    }

    #[test]
    fn test_partial_last_page_label() {
        assert_eq!(format_range_label(40, 45, 45, RESULTS_NOUN), "Showing 41-45 of 45 results");
    }

    #[test]
    fn test_empty_label() {
        assert_eq!(format_range_label(0, 0, 0, RESULTS_NOUN), "Showing 1-0 of 0 results");
    }

    #[test]
    fn test_custom_noun() {
        assert_eq!(
            format_range_label(2980, 3000, 3000, "images"),
            "Showing 2981-3000 of 3000 images"
        );
    }
}
