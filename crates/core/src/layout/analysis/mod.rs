//! Layout analysis over OCR fragments
//!
//! Contains the algorithms for:
//! - Removing fragments swallowed by larger duplicates
//! - Merging overlapping same-direction fragments
//! - Grouping fragments into columns and rows
//! - Ordering groups into a page-level reading sequence

mod dedup;
mod grouping;
mod merge;
mod ordering;

// Re-export public types and functions
pub use dedup::{find_duplicates, remove_duplicates};
pub use grouping::{
    group_columns, group_fragments, group_rows, is_horizontal_overlap, is_vertical_overlap,
};
pub use merge::{merge_fragments, merge_overlapping};
pub use ordering::{
    OrderStats, ReadingOrder, leading_direction, order_fragments, reading_order, renumber,
    sort_columns, sort_rows,
};
