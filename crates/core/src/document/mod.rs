//! Document module - OCR results for a whole document.
//!
//! This module contains:
//! - `page` - per-page results (Page) and raw engine detections (RawFragment)
//! - `Document` - the ordered page list plus aggregate metadata

pub mod page;
mod seconds;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TategakiError};

pub use page::{Page, RawFragment};

/// OCR results for every page of a document.
///
/// Processing only ever replaces the fragment sequence of a page; pages are
/// never added, removed or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Source the pages were rendered from, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_file: Option<PathBuf>,
    pub pages: Vec<Page>,
    /// Serialized as fractional seconds.
    #[serde(default, with = "seconds")]
    pub total_processing_time: Duration,
    /// Device the OCR engine ran on.
    #[serde(default = "default_device")]
    pub device_used: String,
    /// Rasterization resolution.
    #[serde(default = "default_dpi")]
    pub dpi: u32,
}

fn default_device() -> String {
    "cpu".to_string()
}

fn default_dpi() -> u32 {
    300
}

/// Aggregate counts over a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub total_pages: usize,
    pub successful_pages: usize,
    pub total_fragments: usize,
    /// Length of `Document::document_text` in characters.
    pub document_length: usize,
}

impl Document {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            input_file: None,
            pages,
            total_processing_time: Duration::ZERO,
            device_used: default_device(),
            dpi: default_dpi(),
        }
    }

    pub fn with_input_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_file = Some(path.into());
        self
    }

    /// Same document metadata with the page list replaced.
    pub fn with_pages(&self, pages: Vec<Page>) -> Self {
        Self {
            input_file: self.input_file.clone(),
            pages,
            total_processing_time: self.total_processing_time,
            device_used: self.device_used.clone(),
            dpi: self.dpi,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn successful_pages(&self) -> usize {
        self.pages.iter().filter(|p| p.success).count()
    }

    pub fn total_fragments(&self) -> usize {
        self.pages.iter().map(Page::text_count).sum()
    }

    /// Text of every successful page, pages separated by a blank line.
    pub fn document_text(&self) -> String {
        self.pages
            .iter()
            .filter(|p| p.success)
            .map(Page::total_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            total_pages: self.total_pages(),
            successful_pages: self.successful_pages(),
            total_fragments: self.total_fragments(),
            document_length: self.document_text().chars().count(),
        }
    }

    /// Looks up a page by its 1-based page number.
    pub fn page(&self, page_number: u32) -> Result<&Page> {
        self.pages
            .iter()
            .find(|p| p.page_number == page_number)
            .ok_or(TategakiError::PageNotFound(page_number))
    }

    /// Copy of the document with duplicates removed from every successful,
    /// non-empty page.
    ///
    /// The map records the number of removed fragments per page number; pages
    /// that lost nothing are left out.
    pub fn without_duplicates(&self, threshold: f64) -> (Self, BTreeMap<u32, usize>) {
        let mut removed_counts = BTreeMap::new();
        let pages = self
            .pages
            .iter()
            .map(|page| {
                if !page.success || page.fragments.is_empty() {
                    return page.clone();
                }
                let (deduped, removed) = page.without_duplicates(threshold);
                if removed > 0 {
                    removed_counts.insert(page.page_number, removed);
                }
                deduped
            })
            .collect();
        (self.with_pages(pages), removed_counts)
    }
}
