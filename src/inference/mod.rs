//! Sketch submission to the remote retrieval model.
//!
//! The model itself lives behind an HTTP endpoint; this module only encodes
//! the sketch and decodes the ranked identifiers that come back.

pub mod client;
pub mod errors;
pub mod sketch;

pub use client::InferenceClient;
pub use errors::*;
pub use sketch::SketchImage;
