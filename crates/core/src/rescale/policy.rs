//! Network-input space to original-frame space, with clipping.
//!
//! The preprocessing collaborator fitted the frame into the network
//! input under one of two aspect-preserving policies; these functions
//! invert that fit. Every coordinate is clamped to
//! `[0, frame_dim - 1]` independently: out-of-bounds points are
//! clamped, never skipped.

use crate::shared::detection::Detection;

/// How the frame was fitted into the network input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RescalePolicy {
    /// Letterbox: scaled content centered with symmetric padding.
    Center,
    /// Scaled content anchored at the origin; any padding accumulates
    /// at the right/bottom edges.
    RightBottom,
}

/// Inverse-fit parameters: `mapped = (v - pad) * scale`.
struct Mapping {
    scale: f32,
    pad_w: f32,
    pad_h: f32,
}

fn mapping(frame_w: f32, frame_h: f32, nn_w: f32, nn_h: f32, policy: RescalePolicy) -> Mapping {
    let ratio_h = nn_h / frame_h;
    let ratio_w = nn_w / frame_w;

    match policy {
        RescalePolicy::Center => {
            if ratio_h > ratio_w {
                Mapping {
                    scale: 1.0 / ratio_w,
                    pad_w: 0.0,
                    pad_h: (nn_h - frame_h * ratio_w) / 2.0,
                }
            } else {
                Mapping {
                    scale: 1.0 / ratio_h,
                    pad_w: (nn_w - frame_w * ratio_h) / 2.0,
                    pad_h: 0.0,
                }
            }
        }
        RescalePolicy::RightBottom => Mapping {
            scale: 1.0 / ratio_h.min(ratio_w),
            pad_w: 0.0,
            pad_h: 0.0,
        },
    }
}

fn map_coord(v: f32, pad: f32, scale: f32, max: f32) -> f32 {
    ((v - pad) * scale).clamp(0.0, max)
}

/// Map one detection's box corners and landmarks into frame space.
pub fn rescale_detection(
    det: &mut Detection,
    frame_w: f32,
    frame_h: f32,
    nn_w: f32,
    nn_h: f32,
    policy: RescalePolicy,
) {
    let m = mapping(frame_w, frame_h, nn_w, nn_h, policy);
    let max_x = frame_w - 1.0;
    let max_y = frame_h - 1.0;

    det.bbox.x1 = map_coord(det.bbox.x1, m.pad_w, m.scale, max_x);
    det.bbox.y1 = map_coord(det.bbox.y1, m.pad_h, m.scale, max_y);
    det.bbox.x2 = map_coord(det.bbox.x2, m.pad_w, m.scale, max_x);
    det.bbox.y2 = map_coord(det.bbox.y2, m.pad_h, m.scale, max_y);

    for lm in &mut det.landmarks {
        lm.x = map_coord(lm.x, m.pad_w, m.scale, max_x);
        lm.y = map_coord(lm.y, m.pad_h, m.scale, max_y);
    }
}

/// Map a whole batch in place.
pub fn rescale_detections(
    detections: &mut [Detection],
    frame_w: f32,
    frame_h: f32,
    nn_w: f32,
    nn_h: f32,
    policy: RescalePolicy,
) {
    for det in detections {
        rescale_detection(det, frame_w, frame_h, nn_w, nn_h, policy);
    }
}
