//! Geometric primitives for OCR fragment layout.
//!
//! Coordinates are raw pixel-space values with the origin at the top-left
//! corner of the page image: `(x0, y0)` is the top-left and `(x1, y1)` the
//! bottom-right corner of a box. Every measure here is total. Degenerate or
//! NaN-carrying boxes report zero area and never overlap anything.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TategakiError};

/// A 2D point (x, y).
pub type Point = (f64, f64);

/// A rectangle as a plain `(x0, y0, x1, y1)` tuple.
pub type Rect = (f64, f64, f64, f64);

/// Trait for objects that have a bounding box.
pub trait HasBBox {
    fn x0(&self) -> f64;
    fn y0(&self) -> f64;
    fn x1(&self) -> f64;
    fn y1(&self) -> f64;

    fn bbox(&self) -> Rect {
        (self.x0(), self.y0(), self.x1(), self.y1())
    }

    fn width(&self) -> f64 {
        self.x1() - self.x0()
    }

    fn height(&self) -> f64 {
        self.y1() - self.y0()
    }

    /// Area of the box, or 0 when the box is degenerate.
    fn area(&self) -> f64 {
        let (w, h) = (self.width(), self.height());
        if w > 0.0 && h > 0.0 { w * h } else { 0.0 }
    }

    fn center(&self) -> Point {
        (
            (self.x0() + self.x1()) / 2.0,
            (self.y0() + self.y1()) / 2.0,
        )
    }
}

/// Axis-aligned bounding box of a detected text fragment.
///
/// Serialized as a `[x0, y0, x1, y1]` array, the shape OCR engines emit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BoundingBox {
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Builds a box from a coordinate list, which must hold exactly four values.
    pub fn from_slice(coords: &[f64]) -> Result<Self> {
        match *coords {
            [x0, y0, x1, y1] => Ok(Self::new(x0, y0, x1, y1)),
            _ => Err(TategakiError::InvalidCoordinates(coords.len())),
        }
    }

    /// Smallest axis-aligned box enclosing a polygon, e.g. the rotated
    /// quadrilateral an OCR detector reports for a word.
    pub fn from_points(points: &[Point]) -> Result<Self> {
        let (&(fx, fy), rest) = points.split_first().ok_or(TategakiError::EmptyPolygon)?;
        Ok(rest.iter().fold(Self::new(fx, fy, fx, fy), |acc, &(x, y)| {
            Self::new(acc.x0.min(x), acc.y0.min(y), acc.x1.max(x), acc.y1.max(y))
        }))
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.x0, self.y0, self.x1, self.y1]
    }

    fn has_nan(&self) -> bool {
        self.x0.is_nan() || self.y0.is_nan() || self.x1.is_nan() || self.y1.is_nan()
    }

    /// True when the box has no positive width or height.
    pub fn is_empty(&self) -> bool {
        self.area() == 0.0
    }

    /// Overlap region of two boxes. Only a region with strictly positive
    /// width and height counts; touching edges yield `None`.
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        if self.has_nan() || other.has_nan() {
            return None;
        }
        let x0 = self.x0.max(other.x0);
        let y0 = self.y0.max(other.y0);
        let x1 = self.x1.min(other.x1);
        let y1 = self.y1.min(other.y1);
        if x0 < x1 && y0 < y1 {
            Some(BoundingBox::new(x0, y0, x1, y1))
        } else {
            None
        }
    }

    pub fn intersection_area(&self, other: &BoundingBox) -> f64 {
        self.intersection(other).map_or(0.0, |r| r.area())
    }

    /// Fraction of `self` covered by `other`.
    ///
    /// Directional: `a.overlap_ratio(&b)` and `b.overlap_ratio(&a)` differ
    /// whenever the areas differ. Returns 0 for a degenerate `self`.
    pub fn overlap_ratio(&self, other: &BoundingBox) -> f64 {
        let area = self.area();
        if area > 0.0 {
            self.intersection_area(other) / area
        } else {
            0.0
        }
    }

    /// Intersection area relative to the smaller of the two boxes.
    pub fn symmetric_overlap(&self, other: &BoundingBox) -> f64 {
        let smaller = self.area().min(other.area());
        if smaller > 0.0 {
            self.intersection_area(other) / smaller
        } else {
            0.0
        }
    }

    /// Length of the overlap of the two boxes projected onto the x axis.
    pub fn hoverlap(&self, other: &BoundingBox) -> f64 {
        if self.has_nan() || other.has_nan() {
            return 0.0;
        }
        (self.x1.min(other.x1) - self.x0.max(other.x0)).max(0.0)
    }

    /// Length of the overlap of the two boxes projected onto the y axis.
    pub fn voverlap(&self, other: &BoundingBox) -> f64 {
        if self.has_nan() || other.has_nan() {
            return 0.0;
        }
        (self.y1.min(other.y1) - self.y0.max(other.y0)).max(0.0)
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }

    /// Smallest box containing every box in `boxes`, or `None` if there are none.
    pub fn union_all<'a, I>(boxes: I) -> Option<BoundingBox>
    where
        I: IntoIterator<Item = &'a BoundingBox>,
    {
        boxes.into_iter().fold(None, |acc, b| match acc {
            Some(u) => Some(b.union(&u)),
            None => Some(*b),
        })
    }

    /// True if `other` lies entirely inside `self` (edges inclusive).
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.x0 <= other.x0 && self.y0 <= other.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }
}

impl HasBBox for BoundingBox {
    fn x0(&self) -> f64 {
        self.x0
    }
    fn y0(&self) -> f64 {
        self.y0
    }
    fn x1(&self) -> f64 {
        self.x1
    }
    fn y1(&self) -> f64 {
        self.y1
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([x0, y0, x1, y1]: [f64; 4]) -> Self {
        Self::new(x0, y0, x1, y1)
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(b: BoundingBox) -> Self {
        b.to_array()
    }
}

impl From<Rect> for BoundingBox {
    fn from((x0, y0, x1, y1): Rect) -> Self {
        Self::new(x0, y0, x1, y1)
    }
}
