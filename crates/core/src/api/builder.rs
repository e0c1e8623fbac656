//! Builder pattern for reading-order processing.
//!
//! Provides a fluent API for configuring and running the pipeline.
//!
//! # Example
//! ```ignore
//! use tategaki_core::api::ReadingOrderBuilder;
//!
//! let ordered = ReadingOrderBuilder::new()
//!     .merge_overlap(0.4)
//!     .remove_duplicates(true)
//!     .parallel(4)
//!     .process(&document)?;
//! ```

use crate::document::Document;
use crate::error::Result;
use crate::layout::OrderParams;

use super::events::{NoopSink, ProgressSink};
use super::high_level::{DedupMode, OrderOptions, process_document_with_sink};

/// A builder for configuring reading-order processing.
///
/// Wraps `OrderOptions`; thresholds are validated when the options are
/// built or used.
#[derive(Debug, Clone, Default)]
pub struct ReadingOrderBuilder {
    options: OrderOptions,
}

impl ReadingOrderBuilder {
    /// Creates a builder with default thresholds, no duplicate removal and
    /// sequential processing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all thresholds at once.
    pub fn params(mut self, params: OrderParams) -> Self {
        self.options.params = params;
        self
    }

    /// Fraction of a fragment's area a larger fragment must cover for it to
    /// count as a duplicate.
    pub fn duplicate_overlap(mut self, threshold: f64) -> Self {
        self.options.params.duplicate_overlap = threshold;
        self
    }

    /// Symmetric overlap at which same-direction fragments are merged.
    pub fn merge_overlap(mut self, threshold: f64) -> Self {
        self.options.params.merge_overlap = threshold;
        self
    }

    pub fn column_overlap(mut self, threshold: f64) -> Self {
        self.options.params.column_overlap = threshold;
        self
    }

    pub fn row_overlap(mut self, threshold: f64) -> Self {
        self.options.params.row_overlap = threshold;
        self
    }

    /// Enables duplicate removal ahead of merging.
    ///
    /// Off by default. When enabled, every successful page first drops
    /// fragments swallowed by a strictly larger one, using the
    /// `duplicate_overlap` threshold.
    ///
    /// # Arguments
    /// * `enabled` - Whether to run duplicate removal.
    ///
    /// # Example
    /// ```ignore
    /// let builder = ReadingOrderBuilder::new().remove_duplicates(true);
    /// ```
    pub fn remove_duplicates(mut self, enabled: bool) -> Self {
        self.options.dedup = if enabled {
            DedupMode::BeforeMerge
        } else {
            DedupMode::Skip
        };
        self
    }

    /// Processes pages on a pool of `threads` workers.
    ///
    /// Pages are independent, so results are identical to sequential
    /// processing and come back in their original order.
    ///
    /// # Arguments
    /// * `threads` - Number of worker threads for the dedicated pool.
    ///
    /// # Example
    /// ```ignore
    /// let builder = ReadingOrderBuilder::new().parallel(4);
    /// ```
    pub fn parallel(mut self, threads: usize) -> Self {
        self.options.threads = Some(threads);
        self
    }

    /// Processes pages on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.options.threads = None;
        self
    }

    /// Validates and returns the configured options.
    pub fn build(self) -> Result<OrderOptions> {
        self.options.params.validate()?;
        Ok(self.options)
    }

    /// Runs the configured pipeline over a document.
    ///
    /// Returns a new document; `doc` is left untouched.
    ///
    /// # Errors
    /// Returns `InvalidThreshold` if a threshold lies outside `(0, 1]`, or
    /// `ThreadPool` if the worker pool cannot be built.
    ///
    /// # Example
    /// ```ignore
    /// let ordered = ReadingOrderBuilder::new()
    ///     .merge_overlap(0.4)
    ///     .process(&document)?;
    /// ```
    pub fn process(&self, doc: &Document) -> Result<Document> {
        self.process_with_sink(doc, &NoopSink)
    }

    /// Like [`process`](Self::process), reporting each step to `sink`.
    pub fn process_with_sink(&self, doc: &Document, sink: &dyn ProgressSink) -> Result<Document> {
        process_document_with_sink(doc, Some(self.options.clone()), sink)
    }
}
