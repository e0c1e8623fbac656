//! High-level reading-order API
//!
//! Provides the main public entry points:
//! - `sort_page_reading_order()` - merge, group and order one page
//! - `sort_document_reading_order()` - the same for every page of a document
//! - `remove_document_duplicates()` - standalone duplicate removal
//! - `process_document()` - configurable pipeline with progress events and
//!   optional parallelism

use std::time::Instant;

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::api::events::{NoopSink, PipelineEvent, ProgressSink};
use crate::document::{Document, Page};
use crate::error::{Result, TategakiError};
use crate::layout::{OrderParams, reading_order};

/// When duplicate removal runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DedupMode {
    /// Leave duplicates alone.
    #[default]
    Skip,
    /// Remove duplicates from each page before merging.
    BeforeMerge,
}

/// Options for document processing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderOptions {
    /// Thresholds for every stage.
    pub params: OrderParams,

    pub dedup: DedupMode,

    /// Worker threads for page-level parallelism. None processes pages
    /// sequentially on the calling thread.
    pub threads: Option<usize>,
}

/// Reorders one page: merge, group, sort, combine and renumber.
///
/// A page without fragments (for instance a failed one) comes back
/// unchanged.
pub fn sort_page_reading_order(page: &Page, params: &OrderParams) -> Page {
    if page.fragments.is_empty() {
        debug!(page = page.page_number, "no fragments, skipping reading order");
        return page.clone();
    }

    info!(
        page = page.page_number,
        fragments = page.fragments.len(),
        "sorting page into reading order"
    );
    let ordered = reading_order(&page.fragments, params);
    info!(
        page = page.page_number,
        fragments = ordered.fragments.len(),
        "page reading order complete"
    );
    page.with_fragments(ordered.fragments)
}

/// Reorders every page of a document independently.
pub fn sort_document_reading_order(doc: &Document, params: &OrderParams) -> Document {
    info!(pages = doc.pages.len(), "sorting document into reading order");
    let pages = doc
        .pages
        .iter()
        .map(|page| sort_page_reading_order(page, params))
        .collect();
    info!("document reading order complete");
    doc.with_pages(pages)
}

/// Removes duplicate fragments across a document.
///
/// Returns the new document and, for each page that lost fragments, how
/// many were removed.
pub fn remove_document_duplicates(
    doc: &Document,
    threshold: f64,
) -> (Document, std::collections::BTreeMap<u32, usize>) {
    let (deduped, removed) = doc.without_duplicates(threshold);
    info!(
        pages = removed.len(),
        fragments = removed.values().sum::<usize>(),
        "removed duplicate fragments"
    );
    (deduped, removed)
}

/// Runs the configured pipeline on one page, reporting each step to `sink`.
pub fn process_page(page: &Page, options: &OrderOptions, sink: &dyn ProgressSink) -> Page {
    let started = Instant::now();
    let page_number = page.page_number;
    sink.on_event(&PipelineEvent::PageStarted {
        page_number,
        fragments: page.fragments.len(),
    });

    let mut current = page.clone();
    if options.dedup == DedupMode::BeforeMerge && page.success && !page.fragments.is_empty() {
        let (deduped, removed) = page.without_duplicates(options.params.duplicate_overlap);
        sink.on_event(&PipelineEvent::DuplicatesRemoved {
            page_number,
            removed,
        });
        current = deduped;
    }

    if !current.fragments.is_empty() {
        let ordered = reading_order(&current.fragments, &options.params);
        sink.on_event(&PipelineEvent::FragmentsMerged {
            page_number,
            before: ordered.stats.input,
            after: ordered.stats.merged,
        });
        sink.on_event(&PipelineEvent::GroupsFormed {
            page_number,
            columns: ordered.stats.columns,
            rows: ordered.stats.rows,
            leading: ordered.stats.leading,
        });
        debug!(
            page = page_number,
            columns = ordered.stats.columns,
            rows = ordered.stats.rows,
            "page ordered"
        );
        current = current.with_fragments(ordered.fragments);
    }

    sink.on_event(&PipelineEvent::PageFinished {
        page_number,
        fragments: current.fragments.len(),
        elapsed: started.elapsed(),
    });
    current
}

/// Runs the configured pipeline over every page of a document.
///
/// With `options.threads` set, pages are processed on a dedicated rayon pool
/// and reassembled in their original order.
///
/// # Example
/// ```ignore
/// use tategaki_core::api::{OrderOptions, process_document};
///
/// let ordered = process_document(&doc, None)?;
/// ```
pub fn process_document(doc: &Document, options: Option<OrderOptions>) -> Result<Document> {
    process_document_with_sink(doc, options, &NoopSink)
}

/// Like [`process_document`], reporting progress to `sink`.
pub fn process_document_with_sink(
    doc: &Document,
    options: Option<OrderOptions>,
    sink: &dyn ProgressSink,
) -> Result<Document> {
    let options = options.unwrap_or_default();
    options.params.validate()?;

    let started = Instant::now();
    info!(
        pages = doc.pages.len(),
        threads = options.threads,
        "processing document"
    );

    let pages = match options.threads {
        Some(thread_count) => {
            let pool = ThreadPoolBuilder::new()
                .num_threads(thread_count)
                .build()
                .map_err(|e| TategakiError::ThreadPool(e.to_string()))?;

            let mut results: Vec<(usize, Page)> = pool.install(|| {
                doc.pages
                    .par_iter()
                    .enumerate()
                    .map(|(idx, page)| (idx, process_page(page, &options, sink)))
                    .collect()
            });
            results.sort_by_key(|(idx, _)| *idx);
            results.into_iter().map(|(_, page)| page).collect()
        }
        None => doc
            .pages
            .iter()
            .map(|page| process_page(page, &options, sink))
            .collect(),
    };

    let result = doc.with_pages(pages);
    sink.on_event(&PipelineEvent::DocumentFinished {
        pages: result.total_pages(),
        fragments: result.total_fragments(),
        elapsed: started.elapsed(),
    });
    info!(
        pages = result.total_pages(),
        successful = result.successful_pages(),
        fragments = result.total_fragments(),
        "document processing complete"
    );
    Ok(result)
}
