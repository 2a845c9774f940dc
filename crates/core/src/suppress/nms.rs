//! Greedy non-maximum suppression.
//!
//! Deliberately O(n²): the candidate set arrives pre-filtered by the
//! decode score threshold and is small (tens to low hundreds).
//! Spatially-indexed variants change tie behavior; do not substitute
//! one without re-validating numeric output.

use std::cmp::Ordering;

use crate::shared::detection::Detection;
use crate::suppress::metric::{overlap, OverlapMetric};

/// Candidate indices ordered by descending score, ties broken by
/// ascending original index.
///
/// The tie-break makes output reproducible regardless of the sort
/// algorithm's incidental stability; NaN scores compare equal and fall
/// back to index order.
fn score_order(detections: &[Detection]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..detections.len()).collect();
    order.sort_by(|&a, &b| {
        detections[b]
            .score
            .partial_cmp(&detections[a].score)
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });
    order
}

/// Whole-set greedy NMS.
///
/// Repeatedly emits the highest-scoring unsuppressed candidate, then
/// suppresses every remaining candidate whose overlap with it is
/// strictly greater than `threshold` (equal-to-threshold survives).
/// Output is emission order: descending score among survivors, with
/// suppressed entries removed entirely.
pub fn nms(detections: &[Detection], threshold: f32, metric: OverlapMetric) -> Vec<Detection> {
    let order = score_order(detections);
    let mut suppressed = vec![false; detections.len()];
    let mut kept = Vec::new();

    for (pos, &i) in order.iter().enumerate() {
        if suppressed[i] {
            continue;
        }
        kept.push(detections[i].clone());
        for &j in &order[pos + 1..] {
            if suppressed[j] {
                continue;
            }
            if overlap(&detections[i].bbox, &detections[j].bbox, metric) > threshold {
                suppressed[j] = true;
            }
        }
    }

    kept
}

/// Per-class NMS: candidates are grouped by `class_id` and suppressed
/// independently, so boxes of different classes never suppress each
/// other. Groups are concatenated in first-seen class order.
pub fn nms_per_class(
    detections: &[Detection],
    threshold: f32,
    metric: OverlapMetric,
) -> Vec<Detection> {
    let mut groups: Vec<(u32, Vec<Detection>)> = Vec::new();
    for det in detections {
        match groups.iter_mut().find(|(c, _)| *c == det.class_id) {
            Some((_, group)) => group.push(det.clone()),
            None => groups.push((det.class_id, vec![det.clone()])),
        }
    }

    groups
        .iter()
        .flat_map(|(_, group)| nms(group, threshold, metric))
        .collect()
}
