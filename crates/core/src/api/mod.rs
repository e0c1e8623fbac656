//! High-level API module for reading-order processing.
//!
//! # Example
//!
//! ```ignore
//! use tategaki_core::api::{process_document, OrderOptions};
//!
//! let ordered = process_document(&document, Some(OrderOptions::default()))?;
//! ```

pub mod builder;
pub mod events;
pub mod high_level;

// Re-export for convenience
pub use builder::ReadingOrderBuilder;
pub use events::{NoopSink, PipelineEvent, ProgressSink};
pub use high_level::{
    DedupMode, OrderOptions, process_document, process_document_with_sink, process_page,
    remove_document_duplicates, sort_document_reading_order, sort_page_reading_order,
};
