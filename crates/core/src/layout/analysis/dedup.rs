//! Duplicate fragment removal.
//!
//! OCR engines often report the same text twice: once as a word and once as
//! part of a larger paragraph box. A fragment that is mostly swallowed by a
//! strictly larger fragment is dropped.

use tracing::debug;

use crate::geometry::HasBBox;

use super::super::fragment::Fragment;

/// Marks the fragments that are duplicates of a larger fragment.
///
/// Fragment `i` is marked when some other, not yet marked fragment `j`
/// covers at least `threshold` of its area and is strictly larger. The scan
/// for `i` stops at the first such `j`. Marks are only ever added for the
/// fragment currently being examined, so a single forward pass decides
/// everything.
pub fn find_duplicates(fragments: &[Fragment], threshold: f64) -> Vec<bool> {
    let mut removed = vec![false; fragments.len()];
    if fragments.len() <= 1 {
        return removed;
    }

    for (i, candidate) in fragments.iter().enumerate() {
        let area = candidate.area();
        if area <= 0.0 {
            continue;
        }

        for (j, other) in fragments.iter().enumerate() {
            if i == j || removed[j] {
                continue;
            }
            if candidate.bbox.overlap_ratio(&other.bbox) >= threshold && area < other.area() {
                removed[i] = true;
                break;
            }
        }
    }

    removed
}

/// Returns the fragments that survive duplicate removal, in their original
/// order, together with the number removed.
pub fn remove_duplicates(fragments: &[Fragment], threshold: f64) -> (Vec<Fragment>, usize) {
    let removed = find_duplicates(fragments, threshold);
    let kept: Vec<Fragment> = fragments
        .iter()
        .zip(&removed)
        .filter(|&(_, &gone)| !gone)
        .map(|(f, _)| f.clone())
        .collect();

    let count = fragments.len() - kept.len();
    if count > 0 {
        debug!(removed = count, kept = kept.len(), "removed duplicate fragments");
    }
    (kept, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(text: &str, bbox: (f64, f64, f64, f64)) -> Fragment {
        Fragment::horizontal(text, bbox, 0.9)
    }

    #[test]
    fn test_contained_fragment_removed() {
        let frags = vec![
            h("A", (10.0, 10.0, 20.0, 20.0)),
            h("B", (0.0, 0.0, 20.0, 20.0)),
        ];
        let (kept, removed) = remove_duplicates(&frags, 0.6);
        assert_eq!(removed, 1);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].text, "B");
    }

    #[test]
    fn test_equal_areas_never_removed() {
        let frags = vec![
            h("A", (0.0, 0.0, 10.0, 10.0)),
            h("B", (0.0, 0.0, 10.0, 10.0)),
        ];
        let (kept, removed) = remove_duplicates(&frags, 0.6);
        assert_eq!(removed, 0);
        assert_eq!(kept, frags);
    }

    #[test]
    fn test_below_threshold_kept() {
        // Half of A lies inside B.
        let frags = vec![
            h("A", (0.0, 0.0, 10.0, 10.0)),
            h("B", (5.0, 0.0, 30.0, 10.0)),
        ];
        assert_eq!(find_duplicates(&frags, 0.6), vec![false, false]);
        assert_eq!(find_duplicates(&frags, 0.5), vec![true, false]);
    }

    #[test]
    fn test_removed_fragment_cannot_absorb_later_ones() {
        // B is removed by C first; A lies inside B only, so it stays.
        let frags = vec![
            h("B", (0.0, 0.0, 20.0, 20.0)),
            h("C", (5.0, 0.0, 30.0, 20.0)),
            h("A", (0.0, 0.0, 4.0, 4.0)),
        ];
        let removed = find_duplicates(&frags, 0.6);
        assert_eq!(removed, vec![true, false, false]);
    }

    #[test]
    fn test_chain_is_resolved_in_one_pass() {
        let frags = vec![
            h("small", (2.0, 2.0, 4.0, 4.0)),
            h("medium", (0.0, 0.0, 6.0, 6.0)),
            h("large", (0.0, 0.0, 10.0, 10.0)),
        ];
        let (kept, removed) = remove_duplicates(&frags, 0.6);
        assert_eq!(removed, 2);
        assert_eq!(kept[0].text, "large");
    }

    #[test]
    fn test_degenerate_fragment_is_ineligible() {
        let frags = vec![
            h("line", (5.0, 5.0, 8.0, 5.0)),
            h("box", (0.0, 0.0, 10.0, 10.0)),
        ];
        assert_eq!(find_duplicates(&frags, 0.6), vec![false, false]);
    }

    #[test]
    fn test_empty_and_single_are_noops() {
        assert_eq!(remove_duplicates(&[], 0.6), (Vec::new(), 0));
        let single = vec![h("A", (0.0, 0.0, 1.0, 1.0))];
        assert_eq!(remove_duplicates(&single, 0.6), (single.clone(), 0));
    }
}
