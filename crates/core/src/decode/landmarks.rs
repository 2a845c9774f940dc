//! Landmark decoding for face-family heads.

use crate::shared::bbox::BoundingBox;
use crate::shared::landmarks::Landmark;

/// Decode one anchor's landmark offsets using the model family's fixed
/// per-point bias table.
///
/// `raw` holds `(dx, dy)` pairs, one per bias entry:
/// `x = anchor.x1 + (dx + bias_x) * anchor_width - 1` and the symmetric
/// form for `y`, with inclusive anchor extents. Scores default to 1.0;
/// this head shape carries no per-point confidence.
pub fn decode_landmarks(
    anchor: &BoundingBox,
    raw: &[f32],
    bias: &[(f32, f32)],
) -> Vec<Landmark> {
    debug_assert_eq!(
        raw.len(),
        bias.len() * 2,
        "one (dx, dy) pair per bias entry"
    );
    let aw = anchor.width();
    let ah = anchor.height();

    bias.iter()
        .enumerate()
        .map(|(k, &(bx, by))| {
            let x = anchor.x1 + (raw[2 * k] + bx) * aw - 1.0;
            let y = anchor.y1 + (raw[2 * k + 1] + by) * ah - 1.0;
            Landmark::new(x, y)
        })
        .collect()
}

/// Reinterpret a pose-style `(x, y, conf)` row as scored landmarks.
///
/// Heads of this shape emit absolute network-space positions with a
/// per-point confidence channel; no anchor arithmetic is involved.
pub fn decode_landmarks_scored(raw: &[f32]) -> Vec<Landmark> {
    debug_assert_eq!(raw.len() % 3, 0, "rows are (x, y, conf) triplets");

    raw.chunks_exact(3)
        .map(|p| Landmark::with_score(p[0], p[1], p[2]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bias_table_decode() {
        // Anchor at (9, 19)..(18, 28): inclusive extents 10 x 10
        let anchor = BoundingBox::new(9.0, 19.0, 18.0, 28.0);
        let bias = [(0.1, 0.2), (0.5, 0.5)];
        let raw = [0.0, 0.0, 0.1, -0.1];
        let lms = decode_landmarks(&anchor, &raw, &bias);

        assert_eq!(lms.len(), 2);
        // x = 9 + (0.0 + 0.1) * 10 - 1 = 9
        assert_relative_eq!(lms[0].x, 9.0);
        // y = 19 + (0.0 + 0.2) * 10 - 1 = 20
        assert_relative_eq!(lms[0].y, 20.0);
        // x = 9 + (0.1 + 0.5) * 10 - 1 = 14
        assert_relative_eq!(lms[1].x, 14.0);
        // y = 19 + (-0.1 + 0.5) * 10 - 1 = 22
        assert_relative_eq!(lms[1].y, 22.0);
    }

    #[test]
    fn test_bias_decode_has_full_score() {
        let anchor = BoundingBox::new(0.0, 0.0, 9.0, 9.0);
        let lms = decode_landmarks(&anchor, &[0.5, 0.5], &[(0.0, 0.0)]);
        assert_relative_eq!(lms[0].score, 1.0);
    }

    #[test]
    fn test_scored_decode_keeps_confidence_channel() {
        let raw = [100.0, 200.0, 0.9, 150.0, 250.0, 0.3];
        let lms = decode_landmarks_scored(&raw);
        assert_eq!(lms.len(), 2);
        assert_relative_eq!(lms[0].x, 100.0);
        assert_relative_eq!(lms[0].score, 0.9);
        assert_relative_eq!(lms[1].y, 250.0);
        assert_relative_eq!(lms[1].score, 0.3);
    }

    #[test]
    fn test_empty_inputs() {
        let anchor = BoundingBox::new(0.0, 0.0, 9.0, 9.0);
        assert!(decode_landmarks(&anchor, &[], &[]).is_empty());
        assert!(decode_landmarks_scored(&[]).is_empty());
    }
}
