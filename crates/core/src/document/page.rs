//! Per-page OCR results.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::BoundingBox;
use crate::layout::analysis::remove_duplicates;
use crate::layout::fragment::{Direction, Fragment};

/// A detection as reported by an OCR engine, before conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFragment {
    pub text: String,
    /// `[x0, y0, x1, y1]` in page pixels.
    pub bbox: Vec<f64>,
    pub confidence: f64,
    #[serde(default)]
    pub direction: Option<Direction>,
}

/// OCR result for a single page.
///
/// The order of `fragments` carries no meaning until reading order has been
/// applied. Pages are treated as values: every transformation returns a new
/// page and leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number.
    pub page_number: u32,
    pub fragments: Vec<Fragment>,
    /// Width of the rasterized page in pixels.
    pub page_width: f64,
    /// Height of the rasterized page in pixels.
    pub page_height: f64,
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Serialized as fractional seconds.
    #[serde(default, with = "super::seconds")]
    pub processing_time: Duration,
}

fn default_success() -> bool {
    true
}

impl Page {
    pub fn new(page_number: u32, fragments: Vec<Fragment>, page_width: f64, page_height: f64) -> Self {
        Self {
            page_number,
            fragments,
            page_width,
            page_height,
            success: true,
            error: None,
            processing_time: Duration::ZERO,
        }
    }

    /// A page whose recognition failed. It carries no fragments.
    pub fn failed(
        page_number: u32,
        page_width: f64,
        page_height: f64,
        error: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::new(page_number, Vec::new(), page_width, page_height)
        }
    }

    /// Converts raw engine detections into a page.
    ///
    /// Fragments are numbered 1..=N in input order and default to horizontal
    /// text. Fails if any detection does not carry exactly four coordinates.
    pub fn from_raw(
        page_number: u32,
        raw: &[RawFragment],
        page_width: f64,
        page_height: f64,
    ) -> Result<Self> {
        let fragments = raw
            .iter()
            .enumerate()
            .map(|(idx, r)| -> Result<Fragment> {
                let bbox = BoundingBox::from_slice(&r.bbox)?;
                Ok(Fragment::new(
                    r.text.clone(),
                    bbox,
                    r.confidence,
                    r.direction.unwrap_or_default(),
                )
                .with_sequence_id(idx + 1))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(page_number, fragments, page_width, page_height))
    }

    pub fn with_processing_time(mut self, elapsed: Duration) -> Self {
        self.processing_time = elapsed;
        self
    }

    /// Same page with its fragment sequence replaced.
    pub fn with_fragments(&self, fragments: Vec<Fragment>) -> Self {
        Self {
            page_number: self.page_number,
            fragments,
            page_width: self.page_width,
            page_height: self.page_height,
            success: self.success,
            error: self.error.clone(),
            processing_time: self.processing_time,
        }
    }

    /// All fragment texts joined by a single space.
    pub fn total_text(&self) -> String {
        self.fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn text_count(&self) -> usize {
        self.fragments.len()
    }

    /// Mean fragment confidence, 0 for a page without fragments.
    pub fn average_confidence(&self) -> f64 {
        if self.fragments.is_empty() {
            return 0.0;
        }
        self.fragments.iter().map(|f| f.confidence).sum::<f64>() / self.fragments.len() as f64
    }

    /// Copy of this page with duplicate fragments removed, plus the number removed.
    pub fn without_duplicates(&self, threshold: f64) -> (Self, usize) {
        let (kept, removed) = remove_duplicates(&self.fragments, threshold);
        (self.with_fragments(kept), removed)
    }
}
