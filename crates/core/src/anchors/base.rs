//! Base (per-cell) anchor generation.
//!
//! An anchor's identity is its generation index: downstream decode
//! matches anchors to regression channels by position, never by anchor
//! attributes. Ordering is part of the contract.

use crate::shared::bbox::BoundingBox;

/// Anchors for every ratio x scale combination, centered at
/// `(base_size * center_offset, base_size * center_offset)`.
///
/// For ratio `r`: `h_ratio = sqrt(r)`, `w_ratio = 1 / h_ratio`, so the
/// anchor area stays `(base_size * scale)^2` while the aspect varies.
/// Output ordering is ratio-major, scale-minor.
///
/// Pure and deterministic. Negative sizes are a caller bug; the result
/// is garbage, not an error.
pub fn generate_base_anchors(
    base_size: f32,
    center_offset: f32,
    ratios: &[f32],
    scales: &[f32],
) -> Vec<BoundingBox> {
    let center = base_size * center_offset;
    let mut anchors = Vec::with_capacity(ratios.len() * scales.len());

    for &ratio in ratios {
        let h_ratio = ratio.sqrt();
        let w_ratio = 1.0 / h_ratio;
        for &scale in scales {
            let half_w = base_size * w_ratio * scale / 2.0;
            let half_h = base_size * h_ratio * scale / 2.0;
            anchors.push(BoundingBox::new(
                center - half_w,
                center - half_h,
                center + half_w,
                center + half_h,
            ));
        }
    }

    anchors
}
