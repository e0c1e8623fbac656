//! tategaki - reading-order reconstruction for OCR output.
//!
//! Takes the unordered text fragments an OCR engine reports for each page,
//! removes duplicates, merges fragmented detections and sorts the rest into
//! the order a human would read them, including vertical Japanese text.

pub mod api;
pub mod document;
pub mod error;
pub mod geometry;
pub mod layout;

// Re-export high_level for convenience
pub use api::high_level;

pub use document::{Document, DocumentSummary, Page, RawFragment};
pub use error::{Result, TategakiError};
pub use geometry::{BoundingBox, HasBBox};
pub use layout::{Direction, Fragment, OrderParams};
