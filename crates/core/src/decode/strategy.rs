//! Decode parameterization shared by the detector families.

/// Largest regression delta magnitude fed to `exp`.
///
/// An unclamped `exp` of a large delta produces `inf`, and every ratio
/// touching that box downstream becomes `NaN`.
pub const DELTA_CLAMP: f32 = 50.0;

/// How raw regression deltas combine with an anchor.
///
/// The supported model families disagree on parameterization; the
/// variant is selected per call rather than per build.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DecodeStrategy {
    /// SSD-style: deltas are scaled by fixed per-architecture variance
    /// constants before being applied. Anchor extents are exclusive
    /// (`x2 - x1`); SSD priors are continuous boxes, not pixel grids.
    RatioRelative { variances: [f32; 4] },
    /// Region-proposal style: raw deltas against inclusive anchor
    /// extents (`x2 - x1 + 1`). The inclusive convention changes the
    /// numbers; preserve it exactly.
    AnchorCorrected,
}

/// Logit to probability. Heads that emit raw logits apply this before
/// thresholding; the decoder itself never applies it implicitly.
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
