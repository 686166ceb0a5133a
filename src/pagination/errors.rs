//! Error types for page navigation

use thiserror::Error;

/// A page-jump target that cannot be applied.
///
/// The `Display` text is shown to the user as-is, so every variant names the
/// valid range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidPageError {
    #[error("Please enter a page number between 1 and {total_pages}")]
    NotANumber { input: String, total_pages: usize },

    #[error("Please enter a page number between 1 and {total_pages}")]
    OutOfRange { page: usize, total_pages: usize },
}

/// Construction errors for pagination state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page size must be greater than 0")]
    ZeroPageSize,
}

pub type PaginationResult<T> = Result<T, PaginationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_valid_range() {
        let err = InvalidPageError::NotANumber {
            input: "abc".to_string(),
            total_pages: 150,
        };
        assert_eq!(err.to_string(), "Please enter a page number between 1 and 150");

        let err = InvalidPageError::OutOfRange { page: 999, total_pages: 5 };
        assert_eq!(err.to_string(), "Please enter a page number between 1 and 5");
    }
}
