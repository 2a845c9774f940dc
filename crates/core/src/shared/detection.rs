use crate::shared::bbox::BoundingBox;
use crate::shared::landmarks::Landmark;

/// A scored detection: box, class id, and optional landmarks.
///
/// One struct serves both coordinate spaces; the producing function
/// states the space. Decode emits detections in network-input space,
/// the rescaler maps them into original-frame space.
///
/// Plain data with no behavior beyond accessors; callers may copy or
/// serialize it freely.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    pub bbox: BoundingBox,
    pub score: f32,
    /// `0` for single-class detectors.
    pub class_id: u32,
    /// Empty when the model family has no landmark head.
    pub landmarks: Vec<Landmark>,
}

impl Detection {
    pub fn new(bbox: BoundingBox, score: f32) -> Self {
        Self {
            bbox,
            score,
            class_id: 0,
            landmarks: Vec::new(),
        }
    }

    pub fn with_class(bbox: BoundingBox, score: f32, class_id: u32) -> Self {
        Self {
            bbox,
            score,
            class_id,
            landmarks: Vec::new(),
        }
    }

    pub fn has_landmarks(&self) -> bool {
        !self.landmarks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_single_class_without_landmarks() {
        let det = Detection::new(BoundingBox::new(0.0, 0.0, 10.0, 10.0), 0.9);
        assert_eq!(det.class_id, 0);
        assert!(!det.has_landmarks());
    }

    #[test]
    fn test_with_class() {
        let det = Detection::with_class(BoundingBox::new(0.0, 0.0, 10.0, 10.0), 0.9, 7);
        assert_eq!(det.class_id, 7);
    }

    #[test]
    fn test_has_landmarks() {
        let mut det = Detection::new(BoundingBox::new(0.0, 0.0, 10.0, 10.0), 0.9);
        det.landmarks.push(Landmark::new(5.0, 5.0));
        assert!(det.has_landmarks());
    }
}
