//! Fragment-to-line grouping.
//!
//! Vertical fragments are grouped into columns, horizontal fragments into
//! rows. A fragment joins the first existing group whose founding fragment
//! it overlaps along the cross axis, otherwise it founds a new group:
//!
//! ```text
//!   columns (vertical text)        rows (horizontal text)
//!   +--+    +--+                   +------+ +----+   -
//!   |  |    |  |                   |      | |    |   | overlap of the
//!   |  |    +--+                   +------+ +----+   - y projections
//!   +--+    +--+
//!   |<>|    |  |                   +---------+
//!   overlap +--+                   +---------+
//!   of x projections
//! ```

use crate::geometry::BoundingBox;

use super::super::fragment::{Direction, Fragment};

/// True when the x projections of two boxes overlap by at least `threshold`
/// of either box's width.
pub fn is_horizontal_overlap(a: &BoundingBox, b: &BoundingBox, threshold: f64) -> bool {
    let overlap = a.hoverlap(b);
    overlap >= (a.x1 - a.x0) * threshold || overlap >= (b.x1 - b.x0) * threshold
}

/// True when the y projections of two boxes overlap by at least `threshold`
/// of either box's height.
pub fn is_vertical_overlap(a: &BoundingBox, b: &BoundingBox, threshold: f64) -> bool {
    let overlap = a.voverlap(b);
    overlap >= (a.y1 - a.y0) * threshold || overlap >= (b.y1 - b.y0) * threshold
}

/// Groups fragments of one writing direction into lines.
///
/// `Direction::Vertical` yields columns, `Direction::Horizontal` yields rows.
/// Each group is only ever compared through its founding fragment, so the
/// group's extent along the cross axis is fixed by that fragment. The result
/// depends on input order; groups and members are in insertion order.
pub fn group_fragments(
    direction: Direction,
    fragments: Vec<Fragment>,
    threshold: f64,
) -> Vec<Vec<Fragment>> {
    let joins: fn(&BoundingBox, &BoundingBox, f64) -> bool = match direction {
        Direction::Vertical => is_horizontal_overlap,
        Direction::Horizontal => is_vertical_overlap,
    };

    let mut groups: Vec<Vec<Fragment>> = Vec::new();
    for fragment in fragments {
        let target = groups
            .iter()
            .position(|group| joins(&fragment.bbox, &group[0].bbox, threshold));
        match target {
            Some(idx) => groups[idx].push(fragment),
            None => groups.push(vec![fragment]),
        }
    }
    groups
}

/// Groups vertical fragments into columns.
pub fn group_columns(fragments: Vec<Fragment>, threshold: f64) -> Vec<Vec<Fragment>> {
    group_fragments(Direction::Vertical, fragments, threshold)
}

/// Groups horizontal fragments into rows.
pub fn group_rows(fragments: Vec<Fragment>, threshold: f64) -> Vec<Vec<Fragment>> {
    group_fragments(Direction::Horizontal, fragments, threshold)
}
