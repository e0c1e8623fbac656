//! Reading-order reconstruction.
//!
//! Columns of vertical text are read top to bottom, right to left. Rows of
//! horizontal text are read left to right, top to bottom. On a page holding
//! both, the direction whose fragments start higher on the page is emitted
//! first in its entirety, followed by the other.

use std::cmp::Ordering;

use tracing::debug;

use crate::geometry::{BoundingBox, HasBBox};

use super::super::fragment::{Direction, Fragment};
use super::super::params::OrderParams;
use super::grouping::group_fragments;
use super::merge::merge_overlapping;

/// Counts describing one reading-order pass over a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderStats {
    /// Fragments handed to the pass.
    pub input: usize,
    /// Fragments left after merging.
    pub merged: usize,
    pub columns: usize,
    pub rows: usize,
    /// Which direction was emitted first, if both were present.
    pub leading: Option<Direction>,
}

/// Result of a reading-order pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingOrder {
    pub fragments: Vec<Fragment>,
    pub stats: OrderStats,
}

/// Flattens columns into reading order.
///
/// Each column is sorted by ascending top edge. Columns are then placed by
/// descending center x of their topmost fragment.
pub fn sort_columns(mut columns: Vec<Vec<Fragment>>) -> Vec<Fragment> {
    for column in &mut columns {
        column.sort_by(|a, b| a.y0().total_cmp(&b.y0()));
    }
    columns.sort_by(|a, b| group_key(b, center_x).total_cmp(&group_key(a, center_x)));
    columns.into_iter().flatten().collect()
}

/// Flattens rows into reading order.
///
/// Each row is sorted by ascending left edge. Rows are then placed by
/// ascending center y of their leftmost fragment.
pub fn sort_rows(mut rows: Vec<Vec<Fragment>>) -> Vec<Fragment> {
    for row in &mut rows {
        row.sort_by(|a, b| a.x0().total_cmp(&b.x0()));
    }
    rows.sort_by(|a, b| group_key(a, center_y).total_cmp(&group_key(b, center_y)));
    rows.into_iter().flatten().collect()
}

fn center_x(f: &Fragment) -> f64 {
    f.center().0
}

fn center_y(f: &Fragment) -> f64 {
    f.center().1
}

fn group_key(group: &[Fragment], key: fn(&Fragment) -> f64) -> f64 {
    group.first().map_or(0.0, key)
}

/// Decides which direction leads on a page holding both.
///
/// Compares the top edges of the union boxes of each direction's fragments;
/// vertical text wins ties.
pub fn leading_direction(vertical: &[Fragment], horizontal: &[Fragment]) -> Option<Direction> {
    let vertical_box = BoundingBox::union_all(vertical.iter().map(|f| &f.bbox))?;
    let horizontal_box = BoundingBox::union_all(horizontal.iter().map(|f| &f.bbox))?;

    debug!(
        vertical_top = vertical_box.y0,
        horizontal_top = horizontal_box.y0,
        "comparing direction groups"
    );
    match vertical_box.y0.partial_cmp(&horizontal_box.y0) {
        Some(Ordering::Less | Ordering::Equal) => Some(Direction::Vertical),
        _ => Some(Direction::Horizontal),
    }
}

/// Overwrites sequence ids with 1..=N in slice order.
pub fn renumber(fragments: &mut [Fragment]) {
    for (idx, fragment) in fragments.iter_mut().enumerate() {
        fragment.sequence_id = Some(idx + 1);
    }
}

/// Groups, sorts and combines fragments without merging them first.
pub fn order_fragments(fragments: Vec<Fragment>, params: &OrderParams) -> ReadingOrder {
    let input = fragments.len();
    let (vertical, horizontal): (Vec<Fragment>, Vec<Fragment>) =
        fragments.into_iter().partition(Fragment::is_vertical);

    let leading = leading_direction(&vertical, &horizontal);

    let columns = group_fragments(Direction::Vertical, vertical, params.column_overlap);
    let rows = group_fragments(Direction::Horizontal, horizontal, params.row_overlap);
    let stats = OrderStats {
        input,
        merged: input,
        columns: columns.len(),
        rows: rows.len(),
        leading,
    };
    debug!(columns = stats.columns, rows = stats.rows, "grouped fragments");

    let sorted_vertical = sort_columns(columns);
    let sorted_horizontal = sort_rows(rows);

    let (mut ordered, trailing) = match leading {
        Some(Direction::Horizontal) => (sorted_horizontal, sorted_vertical),
        _ => (sorted_vertical, sorted_horizontal),
    };
    ordered.extend(trailing);
    renumber(&mut ordered);

    ReadingOrder {
        fragments: ordered,
        stats,
    }
}

/// Full page pass: merge, group, sort, combine and renumber.
pub fn reading_order(fragments: &[Fragment], params: &OrderParams) -> ReadingOrder {
    let merged = merge_overlapping(fragments, params.merge_overlap);
    let mut result = order_fragments(merged, params);
    result.stats.input = fragments.len();
    result
}
