//! Anchor + regression delta to absolute boxes in network-input space.
//!
//! Anchor index and tensor row correspond positionally; nothing here
//! inspects anchor attributes to match rows. Candidates below the score
//! threshold are skipped before any arithmetic so that suppression cost
//! stays bounded by the pre-filtered set.

use ndarray::ArrayView2;

use crate::decode::landmarks::decode_landmarks;
use crate::decode::strategy::{DecodeStrategy, DELTA_CLAMP};
use crate::shared::bbox::BoundingBox;
use crate::shared::detection::Detection;

/// Landmark regression inputs accompanying the box tensor: one row of
/// `2 * bias.len()` offsets per anchor, plus the model family's fixed
/// per-point bias table.
#[derive(Clone, Copy, Debug)]
pub struct LandmarkSpec<'a> {
    pub deltas: ArrayView2<'a, f32>,
    pub bias: &'a [(f32, f32)],
}

/// Decode one delta row against its anchor.
///
/// `dw`/`dh` are clamped before `exp` (overflow guard). A degenerate or
/// inverted result is returned unchanged; clipping and suppression give
/// it defined treatment later.
fn decode_one(
    anchor: &BoundingBox,
    dx: f32,
    dy: f32,
    dw: f32,
    dh: f32,
    strategy: DecodeStrategy,
) -> BoundingBox {
    let dw = dw.clamp(-DELTA_CLAMP, DELTA_CLAMP);
    let dh = dh.clamp(-DELTA_CLAMP, DELTA_CLAMP);
    let (acx, acy) = anchor.center();

    match strategy {
        DecodeStrategy::RatioRelative {
            variances: [v0, v1, v2, v3],
        } => {
            let aw = anchor.x2 - anchor.x1;
            let ah = anchor.y2 - anchor.y1;
            let cx = v0 * dx * aw + acx;
            let cy = v1 * dy * ah + acy;
            let w = (v2 * dw).exp() * aw;
            let h = (v3 * dh).exp() * ah;
            BoundingBox::new(cx - w / 2.0, cy - h / 2.0, cx + w / 2.0, cy + h / 2.0)
        }
        DecodeStrategy::AnchorCorrected => {
            let aw = anchor.width();
            let ah = anchor.height();
            let cx = dx * aw + acx;
            let cy = dy * ah + acy;
            let w = dw.exp() * aw;
            let h = dh.exp() * ah;
            // Corner form keeps the inclusive convention: x2 - x1 + 1 == w
            BoundingBox::new(
                cx - (w - 1.0) / 2.0,
                cy - (h - 1.0) / 2.0,
                cx + (w - 1.0) / 2.0,
                cy + (h - 1.0) / 2.0,
            )
        }
    }
}

/// Decode a single-class head: one score and one delta row per anchor.
///
/// Rows scoring below `score_threshold` are dropped here, before NMS.
/// When `landmarks` is supplied, each surviving detection also gets its
/// decoded landmark set.
pub fn decode_boxes(
    anchors: &[BoundingBox],
    deltas: ArrayView2<'_, f32>,
    scores: &[f32],
    landmarks: Option<&LandmarkSpec<'_>>,
    strategy: DecodeStrategy,
    score_threshold: f32,
) -> Vec<Detection> {
    debug_assert_eq!(deltas.nrows(), anchors.len(), "one delta row per anchor");
    debug_assert_eq!(scores.len(), anchors.len(), "one score per anchor");
    if let Some(spec) = landmarks {
        debug_assert_eq!(
            spec.deltas.nrows(),
            anchors.len(),
            "one landmark row per anchor"
        );
        debug_assert_eq!(
            spec.deltas.ncols(),
            spec.bias.len() * 2,
            "landmark row length must match the bias table"
        );
    }

    let mut detections = Vec::new();
    for (i, (anchor, &score)) in anchors.iter().zip(scores).enumerate() {
        if score < score_threshold {
            continue;
        }
        let row = deltas.row(i);
        let bbox = decode_one(anchor, row[0], row[1], row[2], row[3], strategy);
        let mut det = Detection::new(bbox, score);
        if let Some(spec) = landmarks {
            let lm_row = spec.deltas.row(i);
            det.landmarks = decode_landmarks(
                anchor,
                lm_row.as_slice().expect("row of a validated view"),
                spec.bias,
            );
        }
        detections.push(det);
    }
    detections
}

/// Decode a multi-class head: a score *vector* per anchor.
///
/// Emits one detection per `(anchor, class)` pair passing the
/// threshold, carrying the class column index as `class_id`. The box is
/// decoded once per anchor and shared. Background-column exclusion is
/// the caller's concern: pass a view without that column.
pub fn decode_boxes_multiclass(
    anchors: &[BoundingBox],
    deltas: ArrayView2<'_, f32>,
    class_scores: ArrayView2<'_, f32>,
    strategy: DecodeStrategy,
    score_threshold: f32,
) -> Vec<Detection> {
    debug_assert_eq!(deltas.nrows(), anchors.len(), "one delta row per anchor");
    debug_assert_eq!(
        class_scores.nrows(),
        anchors.len(),
        "one score row per anchor"
    );

    let mut detections = Vec::new();
    for (i, anchor) in anchors.iter().enumerate() {
        let scores = class_scores.row(i);
        if !scores.iter().any(|&s| s >= score_threshold) {
            continue;
        }
        let row = deltas.row(i);
        let bbox = decode_one(anchor, row[0], row[1], row[2], row[3], strategy);
        for (class_id, &score) in scores.iter().enumerate() {
            if score >= score_threshold {
                detections.push(Detection::with_class(bbox, score, class_id as u32));
            }
        }
    }
    detections
}
