//! Detector output decoding and suppression.
//!
//! Turns raw neural-network detection tensors (per-anchor scores and
//! box/landmark regression values) into a de-duplicated, image-space
//! list of bounding boxes. Consumes flat numeric buffers only; the
//! inference runtime and all image handling live with the caller.
//!
//! Four components compose into the per-call pipeline:
//! [`anchors`] generates prior boxes, [`decode`] turns regression
//! deltas into absolute boxes (and landmarks) in network-input space,
//! [`suppress`] removes duplicates, and [`rescale`] maps survivors
//! into original-frame coordinates. [`PostProcessor`] wires the stages
//! together for ordinary detectors; cascade architectures call the
//! components directly with per-stage settings.

pub mod anchors;
pub mod decode;
pub mod pipeline;
pub mod rescale;
pub mod shared;
pub mod suppress;

pub use pipeline::post_processor::{
    FrameGeometry, LandmarkBuffers, PostProcessConfig, PostProcessError, PostProcessor,
};
pub use shared::bbox::BoundingBox;
pub use shared::detection::Detection;
pub use shared::landmarks::Landmark;
