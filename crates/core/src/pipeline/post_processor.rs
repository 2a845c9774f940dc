//! One-call composition of the decode, suppression, and rescale
//! stages.
//!
//! The component modules stay independently usable (cascade stages call
//! them directly with per-stage settings); this layer adds the shape
//! validation and the fixed ordering that every ordinary detector
//! architecture shares: validate, decode, suppress, rescale.

use thiserror::Error;

use crate::decode::boxes::{decode_boxes, decode_boxes_multiclass, LandmarkSpec};
use crate::decode::strategy::DecodeStrategy;
use crate::rescale::policy::{rescale_detections, RescalePolicy};
use crate::shared::bbox::BoundingBox;
use crate::shared::detection::Detection;
use crate::shared::tensor::{view2, TensorShapeError};
use crate::suppress::metric::OverlapMetric;
use crate::suppress::nms::{nms, nms_per_class};

#[derive(Error, Debug)]
pub enum PostProcessError {
    #[error(transparent)]
    Shape(#[from] TensorShapeError),
    #[error("landmark decoding requires a single-class score tensor, got {num_classes} classes")]
    LandmarksNeedSingleClass { num_classes: usize },
    #[error("landmark bias table is empty")]
    EmptyLandmarkBias,
}

/// Per-model-family settings, chosen once by the caller and reused for
/// every frame.
#[derive(Clone, Copy, Debug)]
pub struct PostProcessConfig {
    pub strategy: DecodeStrategy,
    /// Candidates below this score never reach suppression.
    pub score_threshold: f32,
    pub nms_threshold: f32,
    pub metric: OverlapMetric,
    pub policy: RescalePolicy,
    /// Suppress within each class independently instead of across the
    /// whole set.
    pub per_class: bool,
}

/// Per-call geometric context from the preprocessing collaborator.
#[derive(Clone, Copy, Debug)]
pub struct FrameGeometry {
    pub frame_w: u32,
    pub frame_h: u32,
    pub nn_w: u32,
    pub nn_h: u32,
}

/// Landmark tensors accompanying a single-class face head: a flat
/// buffer of `2 * bias.len()` offsets per anchor plus the family's
/// fixed bias table.
#[derive(Clone, Copy, Debug)]
pub struct LandmarkBuffers<'a> {
    pub deltas: &'a [f32],
    pub bias: &'a [(f32, f32)],
}

/// The full per-inference-call pipeline.
///
/// Stateless between calls: every `run` allocates its own
/// intermediates and returns owned results, so concurrent calls on
/// independent inputs need no synchronization.
pub struct PostProcessor {
    config: PostProcessConfig,
}

impl PostProcessor {
    pub fn new(config: PostProcessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PostProcessConfig {
        &self.config
    }

    /// Decode, suppress, and rescale one inference call's outputs.
    ///
    /// `scores` holds `num_classes` values per anchor (row-major);
    /// `deltas` holds one `(dx, dy, dw, dh)` row per anchor. Both must
    /// match `anchors` in length; a mismatch is a configuration error
    /// reported as `Err`, never a panic. The returned detections are in
    /// original-frame space, ordered by descending score among
    /// survivors.
    pub fn run(
        &self,
        anchors: &[BoundingBox],
        scores: &[f32],
        num_classes: usize,
        deltas: &[f32],
        landmarks: Option<LandmarkBuffers<'_>>,
        geometry: FrameGeometry,
    ) -> Result<Vec<Detection>, PostProcessError> {
        let n = anchors.len();
        let cfg = &self.config;

        let delta_view = view2(deltas, n, 4, "box deltas")?;

        let decoded = if num_classes == 1 {
            view2(scores, n, 1, "scores")?;
            let spec = match landmarks {
                Some(buffers) => {
                    if buffers.bias.is_empty() {
                        return Err(PostProcessError::EmptyLandmarkBias);
                    }
                    Some(LandmarkSpec {
                        deltas: view2(
                            buffers.deltas,
                            n,
                            buffers.bias.len() * 2,
                            "landmark deltas",
                        )?,
                        bias: buffers.bias,
                    })
                }
                None => None,
            };
            decode_boxes(
                anchors,
                delta_view,
                scores,
                spec.as_ref(),
                cfg.strategy,
                cfg.score_threshold,
            )
        } else {
            if landmarks.is_some() {
                return Err(PostProcessError::LandmarksNeedSingleClass { num_classes });
            }
            let score_view = view2(scores, n, num_classes, "scores")?;
            decode_boxes_multiclass(
                anchors,
                delta_view,
                score_view,
                cfg.strategy,
                cfg.score_threshold,
            )
        };
        log::debug!(
            "decoded {} of {} candidates above score {}",
            decoded.len(),
            n,
            cfg.score_threshold
        );

        let mut kept = if cfg.per_class {
            nms_per_class(&decoded, cfg.nms_threshold, cfg.metric)
        } else {
            nms(&decoded, cfg.nms_threshold, cfg.metric)
        };
        log::debug!("{} detections after suppression", kept.len());

        rescale_detections(
            &mut kept,
            geometry.frame_w as f32,
            geometry.frame_h as f32,
            geometry.nn_w as f32,
            geometry.nn_h as f32,
            cfg.policy,
        );
        Ok(kept)
    }
}
