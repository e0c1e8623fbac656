//! Reading-order parameters.
//!
//! Contains OrderParams for tuning deduplication, merging and grouping.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TategakiError};

/// Thresholds for the reading-order pipeline.
///
/// Every value is a fraction in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderParams {
    /// A fragment covered by a strictly larger one by at least this fraction
    /// of its own area is a duplicate.
    pub duplicate_overlap: f64,

    /// Same-direction fragments whose intersection covers at least this
    /// fraction of the smaller fragment are merged.
    pub merge_overlap: f64,

    /// Vertical fragments join a column when their horizontal overlap with
    /// the column's first fragment reaches this fraction of either width.
    pub column_overlap: f64,

    /// Horizontal fragments join a row when their vertical overlap with
    /// the row's first fragment reaches this fraction of either height.
    pub row_overlap: f64,
}

impl Default for OrderParams {
    fn default() -> Self {
        Self {
            duplicate_overlap: 0.6,
            merge_overlap: 0.5,
            column_overlap: 0.5,
            row_overlap: 0.5,
        }
    }
}

impl OrderParams {
    /// Creates validated parameters.
    pub fn new(
        duplicate_overlap: f64,
        merge_overlap: f64,
        column_overlap: f64,
        row_overlap: f64,
    ) -> Result<Self> {
        let params = Self {
            duplicate_overlap,
            merge_overlap,
            column_overlap,
            row_overlap,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks that every threshold is finite and within `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        check_threshold("duplicate_overlap", self.duplicate_overlap)?;
        check_threshold("merge_overlap", self.merge_overlap)?;
        check_threshold("column_overlap", self.column_overlap)?;
        check_threshold("row_overlap", self.row_overlap)
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(TategakiError::InvalidThreshold { name, value })
    }
}
