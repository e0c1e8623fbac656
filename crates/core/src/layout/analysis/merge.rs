//! Merging of overlapping same-direction fragments.
//!
//! Detectors frequently split one line of text into several overlapping
//! boxes. Each unconsumed fragment in input order acts as an anchor and
//! collects every later unconsumed fragment of the same direction whose
//! symmetric overlap with the anchor reaches the threshold. Membership is
//! decided against the anchor only: a fragment that overlaps a member but
//! not the anchor waits for its own turn.

use tracing::{debug, trace};

use super::super::fragment::Fragment;

/// Fuses clusters of strongly overlapping fragments.
///
/// The result never holds more fragments than the input. Fragments that join
/// no cluster are passed through untouched and keep their relative order;
/// a merged fragment takes the position of its anchor.
///
/// Admission needs `overlap >= threshold` and a strictly positive overlap.
/// With `threshold == 0.0` disjoint or degenerate boxes therefore stay
/// separate instead of all collapsing into the first anchor. `OrderParams`
/// never hands out a zero threshold, so this only shows for direct callers.
pub fn merge_overlapping(fragments: &[Fragment], threshold: f64) -> Vec<Fragment> {
    if fragments.len() <= 1 {
        return fragments.to_vec();
    }

    let mut consumed = vec![false; fragments.len()];
    let mut merged = Vec::with_capacity(fragments.len());

    for (i, anchor) in fragments.iter().enumerate() {
        if consumed[i] {
            continue;
        }
        consumed[i] = true;

        let mut cluster = vec![anchor];
        for (j, other) in fragments.iter().enumerate().skip(i + 1) {
            if consumed[j] || other.direction != anchor.direction {
                continue;
            }
            let overlap = anchor.bbox.symmetric_overlap(&other.bbox);
            if overlap >= threshold && overlap > 0.0 {
                trace!(anchor = i, member = j, overlap, "merge candidate");
                consumed[j] = true;
                cluster.push(other);
            }
        }

        if let Some(fragment) = merge_fragments(&cluster) {
            merged.push(fragment);
        }
    }

    if merged.len() < fragments.len() {
        debug!(
            before = fragments.len(),
            after = merged.len(),
            "merged overlapping fragments"
        );
    }
    merged
}

/// Builds one fragment out of a cluster.
///
/// - bbox: union of all member boxes
/// - text: the longest member text (first one on ties)
/// - confidence: mean of member confidences
/// - direction and provisional sequence id: from the most confident member
///
/// A single-member cluster is returned as is; an empty one yields `None`.
pub fn merge_fragments(members: &[&Fragment]) -> Option<Fragment> {
    let (first, rest) = members.split_first()?;
    if rest.is_empty() {
        return Some((*first).clone());
    }

    let mut base = *first;
    let mut longest = *first;
    let mut longest_len = first.char_len();
    let mut confidence_sum = first.confidence;
    let mut bbox = first.bbox;

    for &member in rest {
        if member.confidence > base.confidence {
            base = member;
        }
        let len = member.char_len();
        if len > longest_len {
            longest = member;
            longest_len = len;
        }
        confidence_sum += member.confidence;
        bbox = bbox.union(&member.bbox);
    }

    Some(Fragment {
        text: longest.text.clone(),
        bbox,
        confidence: confidence_sum / members.len() as f64,
        direction: base.direction,
        sequence_id: base.sequence_id,
    })
}
