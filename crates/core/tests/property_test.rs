//! Property-based tests for the geometry and layout passes.

use proptest::prelude::*;

use tategaki_core::layout::{
    OrderParams, find_duplicates, merge_overlapping, order_fragments, reading_order,
    remove_duplicates,
};
use tategaki_core::{BoundingBox, Direction, Fragment, HasBBox};

type RawFrag = (f64, f64, f64, f64, bool, f64);

fn build(raw: &[RawFrag]) -> Vec<Fragment> {
    raw.iter()
        .enumerate()
        .map(|(idx, &(x0, y0, w, h, vertical, confidence))| {
            let direction = if vertical {
                Direction::Vertical
            } else {
                Direction::Horizontal
            };
            Fragment::new(
                format!("t{idx}"),
                (x0, y0, x0 + w, y0 + h),
                confidence,
                direction,
            )
        })
        .collect()
}

fn sorted_texts(fragments: &[Fragment]) -> Vec<String> {
    let mut texts: Vec<String> = fragments.iter().map(|f| f.text.clone()).collect();
    texts.sort();
    texts
}

// ============================================================================
// Geometry Properties
// ============================================================================

/// Property: intersection area does not depend on argument order
#[test]
fn proptest_intersection_symmetric() {
    proptest!(|(
        a in (0.0..200.0f64, 0.0..200.0f64, 0.0..100.0f64, 0.0..100.0f64),
        b in (0.0..200.0f64, 0.0..200.0f64, 0.0..100.0f64, 0.0..100.0f64)
    )| {
        let a = BoundingBox::new(a.0, a.1, a.0 + a.2, a.1 + a.3);
        let b = BoundingBox::new(b.0, b.1, b.0 + b.2, b.1 + b.3);
        prop_assert_eq!(a.intersection_area(&b), b.intersection_area(&a));
        prop_assert!(a.intersection_area(&b) <= a.area().min(b.area()));
        prop_assert_eq!(a.symmetric_overlap(&b), b.symmetric_overlap(&a));
    });
}

/// Property: the union of two boxes contains both
#[test]
fn proptest_union_contains_inputs() {
    proptest!(|(
        a in (-100.0..200.0f64, -100.0..200.0f64, 0.0..100.0f64, 0.0..100.0f64),
        b in (-100.0..200.0f64, -100.0..200.0f64, 0.0..100.0f64, 0.0..100.0f64)
    )| {
        let a = BoundingBox::new(a.0, a.1, a.0 + a.2, a.1 + a.3);
        let b = BoundingBox::new(b.0, b.1, b.0 + b.2, b.1 + b.3);
        let u = a.union(&b);
        prop_assert!(u.contains(&a));
        prop_assert!(u.contains(&b));
    });
}

// ============================================================================
// Duplicate Removal Properties
// ============================================================================

/// Property: a second duplicate pass removes nothing
#[test]
fn proptest_dedup_idempotent() {
    proptest!(|(raw in prop::collection::vec(
        (0.0..300.0f64, 0.0..300.0f64, 1.0..120.0f64, 1.0..120.0f64, any::<bool>(), 0.0..1.0f64),
        0..25,
    ))| {
        let fragments = build(&raw);
        let (kept, removed) = remove_duplicates(&fragments, 0.6);
        prop_assert_eq!(kept.len() + removed, fragments.len());

        let (again, removed_again) = remove_duplicates(&kept, 0.6);
        prop_assert_eq!(removed_again, 0);
        prop_assert_eq!(again, kept);
    });
}

/// Property: the largest fragment is never marked
#[test]
fn proptest_dedup_keeps_largest() {
    proptest!(|(raw in prop::collection::vec(
        (0.0..300.0f64, 0.0..300.0f64, 1.0..120.0f64, 1.0..120.0f64, any::<bool>(), 0.0..1.0f64),
        1..25,
    ))| {
        let fragments = build(&raw);
        let marks = find_duplicates(&fragments, 0.6);
        let largest = fragments
            .iter()
            .map(HasBBox::area)
            .fold(f64::MIN, f64::max);
        for (fragment, marked) in fragments.iter().zip(&marks) {
            if fragment.area() == largest {
                prop_assert!(!marked);
            }
        }
    });
}

// ============================================================================
// Merge Properties
// ============================================================================

/// Property: merging never grows the sequence and every input box is covered
#[test]
fn proptest_merge_covers_inputs() {
    proptest!(|(raw in prop::collection::vec(
        (0.0..300.0f64, 0.0..300.0f64, 1.0..120.0f64, 1.0..120.0f64, any::<bool>(), 0.0..1.0f64),
        0..25,
    ))| {
        let fragments = build(&raw);
        let merged = merge_overlapping(&fragments, 0.5);
        prop_assert!(merged.len() <= fragments.len());
        prop_assert_eq!(merged.is_empty(), fragments.is_empty());

        for fragment in &fragments {
            let covered = merged.iter().any(|m| {
                m.direction == fragment.direction && m.bbox.contains(&fragment.bbox)
            });
            prop_assert!(covered, "{} not covered", fragment.text);
        }
        for fragment in &merged {
            prop_assert!(fragment.confidence >= 0.0 && fragment.confidence <= 1.0);
        }
    });
}

// ============================================================================
// Ordering Properties
// ============================================================================

/// Property: ordering is a permutation numbered 1..=N
#[test]
fn proptest_order_is_numbered_permutation() {
    proptest!(|(raw in prop::collection::vec(
        (0.0..300.0f64, 0.0..300.0f64, 1.0..120.0f64, 1.0..120.0f64, any::<bool>(), 0.0..1.0f64),
        0..30,
    ))| {
        let fragments = build(&raw);
        let result = order_fragments(fragments.clone(), &OrderParams::default());

        prop_assert_eq!(result.fragments.len(), fragments.len());
        prop_assert_eq!(sorted_texts(&result.fragments), sorted_texts(&fragments));
        let ids: Vec<Option<usize>> = result.fragments.iter().map(|f| f.sequence_id).collect();
        let expected: Vec<Option<usize>> = (1..=fragments.len()).map(Some).collect();
        prop_assert_eq!(ids, expected);
    });
}

/// Property: one direction is emitted as a contiguous block
#[test]
fn proptest_directions_not_interleaved() {
    proptest!(|(raw in prop::collection::vec(
        (0.0..300.0f64, 0.0..300.0f64, 1.0..120.0f64, 1.0..120.0f64, any::<bool>(), 0.0..1.0f64),
        0..30,
    ))| {
        let result = reading_order(&build(&raw), &OrderParams::default());
        let switches = result
            .fragments
            .windows(2)
            .filter(|pair| pair[0].direction != pair[1].direction)
            .count();
        prop_assert!(switches <= 1);
        prop_assert!(result.stats.merged <= result.stats.input);
    });
}

fn messy_extent() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(-5.0),
        Just(f64::NAN),
        -50.0..120.0f64,
    ]
}

fn messy_coordinate() -> impl Strategy<Value = f64> {
    prop_oneof![Just(f64::NAN), 0.0..300.0f64]
}

/// Property: degenerate and NaN boxes never break the pipeline
#[test]
fn proptest_degenerate_boxes_still_ordered() {
    proptest!(|(raw in prop::collection::vec(
        (messy_coordinate(), messy_coordinate(), messy_extent(), messy_extent(), any::<bool>(), 0.0..1.0f64),
        0..30,
    ))| {
        let fragments = build(&raw);

        let ordered = order_fragments(fragments.clone(), &OrderParams::default());
        prop_assert_eq!(sorted_texts(&ordered.fragments), sorted_texts(&fragments));
        let ids: Vec<Option<usize>> = ordered.fragments.iter().map(|f| f.sequence_id).collect();
        let expected: Vec<Option<usize>> = (1..=fragments.len()).map(Some).collect();
        prop_assert_eq!(ids, expected);

        let result = reading_order(&fragments, &OrderParams::default());
        prop_assert!(result.fragments.len() <= fragments.len());
        let ids: Vec<Option<usize>> = result.fragments.iter().map(|f| f.sequence_id).collect();
        let expected: Vec<Option<usize>> = (1..=result.fragments.len()).map(Some).collect();
        prop_assert_eq!(ids, expected);

        let (kept, removed) = remove_duplicates(&fragments, 0.6);
        prop_assert_eq!(kept.len() + removed, fragments.len());
    });
}
