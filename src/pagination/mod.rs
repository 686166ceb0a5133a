//! Pagination core shared by both galleries.
//!
//! Everything here is synchronous and UI-agnostic: page state, the slice of
//! items visible on a page, the condensed page-selector window and validated
//! page jumps. Rendering layers consume the results.

pub mod errors;
pub mod label;
pub mod paginator;
pub mod state;
pub mod window;

pub use errors::InvalidPageError;
pub use paginator::{PageChange, Paginator};
pub use window::PageToken;
