//! Grid tiling of base anchors, pyramid-level concatenation, and
//! reference points for anchor-free heads.

use crate::shared::bbox::BoundingBox;

/// One feature-map resolution of a multi-scale detector.
#[derive(Clone, Debug)]
pub struct PyramidLevel {
    pub feat_w: usize,
    pub feat_h: usize,
    pub stride: f32,
    pub base_anchors: Vec<BoundingBox>,
}

/// Tile each base anchor over every grid cell of a `feat_w x feat_h`
/// feature map, translating by `(ix * stride, iy * stride)`.
///
/// Output ordering is base-anchor-major, then row-major (column-minor
/// within a row). Positional correspondence with the regression tensor
/// depends on this exact order.
pub fn generate_grid_anchors(
    feat_w: usize,
    feat_h: usize,
    stride: f32,
    base_anchors: &[BoundingBox],
) -> Vec<BoundingBox> {
    let mut anchors = Vec::with_capacity(base_anchors.len() * feat_w * feat_h);

    for base in base_anchors {
        for iy in 0..feat_h {
            let dy = iy as f32 * stride;
            for ix in 0..feat_w {
                let dx = ix as f32 * stride;
                anchors.push(base.shifted(dx, dy));
            }
        }
    }

    anchors
}

/// Grid anchors for every pyramid level, concatenated in the order the
/// levels are supplied (ascending level order by convention).
pub fn generate_pyramid_anchors(levels: &[PyramidLevel]) -> Vec<BoundingBox> {
    let total: usize = levels
        .iter()
        .map(|l| l.base_anchors.len() * l.feat_w * l.feat_h)
        .sum();
    let mut anchors = Vec::with_capacity(total);

    for level in levels {
        anchors.extend(generate_grid_anchors(
            level.feat_w,
            level.feat_h,
            level.stride,
            &level.base_anchors,
        ));
    }

    anchors
}

/// Single-pixel anchors (`x1 == x2`, `y1 == y2`) at every grid cell,
/// row-major.
///
/// Anchor-free heads and cascade stages regress against a fixed
/// reference point rather than a prior box; with the inclusive
/// convention these anchors have width and height exactly 1, so
/// anchor-corrected decode reduces to `pred_w = exp(dw)` in network
/// pixels.
pub fn generate_reference_points(feat_w: usize, feat_h: usize, stride: f32) -> Vec<BoundingBox> {
    let mut points = Vec::with_capacity(feat_w * feat_h);

    for iy in 0..feat_h {
        let y = iy as f32 * stride;
        for ix in 0..feat_w {
            let x = ix as f32 * stride;
            points.push(BoundingBox::new(x, y, x, y));
        }
    }

    points
}
