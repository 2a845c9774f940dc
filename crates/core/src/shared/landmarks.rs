/// A single decoded landmark point.
///
/// `score` is the per-point confidence where the model provides one;
/// heads without landmark confidences report `1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub score: f32,
}

impl Landmark {
    /// A landmark with no per-point confidence (score fixed at 1.0).
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, score: 1.0 }
    }

    pub fn with_score(x: f32, y: f32, score: f32) -> Self {
        Self { x, y, score }
    }
}
