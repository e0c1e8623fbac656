//! Layout module for OCR fragment ordering.
//!
//! This module contains:
//! - Fragment and writing-direction types
//! - Ordering parameters (OrderParams)
//! - Deduplication, merging, grouping and ordering algorithms

pub mod analysis;
pub mod fragment;
pub mod params;

// Re-export params
pub use params::*;

// Re-export fragment types
pub use fragment::*;

// Re-export analysis types and functions
pub use analysis::*;
