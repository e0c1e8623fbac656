//! OCR text fragments and their writing direction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{BoundingBox, HasBBox};

/// Writing direction of a fragment.
///
/// Horizontal text is read in left-to-right lines stacked top to bottom.
/// Vertical text is read in top-to-bottom columns placed right to left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One OCR-detected text span.
///
/// Pipeline stages never edit fragments they were given; they build new
/// sequences. Only `sequence_id` is rewritten once reading order is final.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub text: String,
    pub bbox: BoundingBox,
    /// Recognition score, nominally in `[0, 1]`. Not validated.
    pub confidence: f64,
    #[serde(default)]
    pub direction: Direction,
    /// 1-based reading position once ordering has run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_id: Option<usize>,
}

impl Fragment {
    pub fn new(
        text: impl Into<String>,
        bbox: impl Into<BoundingBox>,
        confidence: f64,
        direction: Direction,
    ) -> Self {
        Self {
            text: text.into(),
            bbox: bbox.into(),
            confidence,
            direction,
            sequence_id: None,
        }
    }

    pub fn horizontal(text: impl Into<String>, bbox: impl Into<BoundingBox>, confidence: f64) -> Self {
        Self::new(text, bbox, confidence, Direction::Horizontal)
    }

    pub fn vertical(text: impl Into<String>, bbox: impl Into<BoundingBox>, confidence: f64) -> Self {
        Self::new(text, bbox, confidence, Direction::Vertical)
    }

    pub fn with_sequence_id(mut self, id: usize) -> Self {
        self.sequence_id = Some(id);
        self
    }

    pub fn is_vertical(&self) -> bool {
        self.direction == Direction::Vertical
    }

    /// Length of the text in characters (Unicode scalar values).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl HasBBox for Fragment {
    fn x0(&self) -> f64 {
        self.bbox.x0
    }
    fn y0(&self) -> f64 {
        self.bbox.y0
    }
    fn x1(&self) -> f64 {
        self.bbox.x1
    }
    fn y1(&self) -> f64 {
        self.bbox.y1
    }
}
