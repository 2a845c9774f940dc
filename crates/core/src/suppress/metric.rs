//! Overlap criteria for suppression.

use crate::shared::bbox::BoundingBox;

/// Which overlap ratio decides suppression, selected per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlapMetric {
    /// Intersection over union, for general object suppression.
    Union,
    /// Intersection over the smaller area. The face-detection cascades
    /// use this for their final pass, where a small box inside a large
    /// one counts as a full overlap.
    Min,
}

/// Overlap between two boxes under `metric`.
///
/// Areas and the intersection use inclusive pixel extents
/// (`x2 - x1 + 1`). An intersection extent at or below zero means no
/// overlap.
pub fn overlap(a: &BoundingBox, b: &BoundingBox, metric: OverlapMetric) -> f32 {
    let iw = a.x2.min(b.x2) - a.x1.max(b.x1) + 1.0;
    let ih = a.y2.min(b.y2) - a.y1.max(b.y1) + 1.0;
    if iw <= 0.0 || ih <= 0.0 {
        return 0.0;
    }

    let inter = iw * ih;
    match metric {
        OverlapMetric::Union => inter / (a.area() + b.area() - inter),
        OverlapMetric::Min => inter / a.area().min(b.area()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_identical_boxes_full_overlap() {
        let b = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert_relative_eq!(overlap(&b, &b, OverlapMetric::Union), 1.0);
        assert_relative_eq!(overlap(&b, &b, OverlapMetric::Min), 1.0);
    }

    #[rstest]
    #[case::union(OverlapMetric::Union)]
    #[case::min(OverlapMetric::Min)]
    fn test_disjoint_boxes_zero_overlap(#[case] metric: OverlapMetric) {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(50.0, 50.0, 60.0, 60.0);
        assert_relative_eq!(overlap(&a, &b, metric), 0.0);
    }

    #[test]
    fn test_inclusive_intersection_arithmetic() {
        // a: [0..10], b: [5..15] along both axes.
        // Inclusive: inter = 6*6 = 36, areas = 121 each.
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(5.0, 5.0, 15.0, 15.0);
        assert_relative_eq!(
            overlap(&a, &b, OverlapMetric::Union),
            36.0 / (121.0 + 121.0 - 36.0)
        );
        assert_relative_eq!(overlap(&a, &b, OverlapMetric::Min), 36.0 / 121.0);
    }

    #[test]
    fn test_min_metric_saturates_for_contained_box() {
        // Small box entirely inside a large one: IoM = 1, IoU < 1
        let outer = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let inner = BoundingBox::new(40.0, 40.0, 49.0, 49.0);
        assert_relative_eq!(overlap(&outer, &inner, OverlapMetric::Min), 1.0);
        assert!(overlap(&outer, &inner, OverlapMetric::Union) < 0.1);
    }

    #[test]
    fn test_touching_edges_still_intersect_inclusively() {
        // Sharing the column x = 10: inclusive intersection width is 1
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(10.0, 0.0, 20.0, 10.0);
        let o = overlap(&a, &b, OverlapMetric::Union);
        assert!(o > 0.0);
        assert_relative_eq!(o, 11.0 / (121.0 + 121.0 - 11.0));
    }

    #[test]
    fn test_adjacent_boxes_do_not_intersect() {
        // Gap of one pixel: inclusive intersection width is 0
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(11.0, 0.0, 20.0, 10.0);
        assert_relative_eq!(overlap(&a, &b, OverlapMetric::Union), 0.0);
    }
}
