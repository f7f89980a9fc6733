use {
    super::{
        postprocess::{deduplicate, postprocess},
        preprocess::{preprocess, split_regions},
    },
    crate::*,
    gesture::{GestureError, HandObservation, LandmarkSource},
    image::Image,
    std::path::Path,
};

// wrists closer than this (normalized) belong to the same hand
const DUPLICATE_DISTANCE: f32 = 0.1;

/// Hand landmark estimator
///
/// Runs a single-hand landmark network (input `[1, 3, 224, 224]`, outputs:
/// 63 landmark values, hand presence, right-hand probability) over the left
/// and right 60% of the frame, so up to two hands can be found without a
/// separate palm detector.
pub struct HandLandmarker {
    session: OnnxSession,
    conf_threshold: f32,
    max_hands: usize,
}

impl HandLandmarker {
    /// Load the model with default thresholds (conf=0.5, two hands)
    pub fn new(model_path: impl AsRef<Path>, device: &Device) -> Result<Self, InferError> {
        let session = OnnxSession::load(model_path.as_ref(), device)?;
        Ok(Self {
            session,
            conf_threshold: 0.5,
            max_hands: 2,
        })
    }

    /// Set confidence threshold (builder pattern)
    pub fn with_conf_threshold(mut self, threshold: f32) -> Self {
        self.conf_threshold = threshold;
        self
    }

    /// Set maximum number of reported hands (builder pattern)
    pub fn with_max_hands(mut self, max_hands: usize) -> Self {
        self.max_hands = max_hands;
        self
    }

    pub fn conf_threshold(&self) -> f32 {
        self.conf_threshold
    }

    pub fn max_hands(&self) -> usize {
        self.max_hands
    }

    /// Find hands in an RGB8 frame.
    pub fn estimate(&mut self, frame: &Image) -> Result<Vec<HandObservation>, InferError> {
        let mut hands = Vec::new();
        for region in split_regions(frame.size) {
            let (input, letterbox) = preprocess(frame, region)?;
            let outputs = self.session.run(&input)?;
            let [landmarks, presence, handedness, ..] = outputs.as_slice() else {
                return Err(InferError::ShapeMismatch {
                    expected: "3 outputs (landmarks, presence, handedness)".to_string(),
                    got: format!("{} outputs", outputs.len()),
                });
            };
            let (Some(&presence), Some(&handedness)) =
                (presence.data.first(), handedness.data.first())
            else {
                return Err(InferError::ShapeMismatch {
                    expected: "scalar presence and handedness".to_string(),
                    got: "empty output".to_string(),
                });
            };
            if let Some(hand) = postprocess(
                landmarks,
                presence,
                handedness,
                &letterbox,
                region,
                frame.size,
                self.conf_threshold,
            )? {
                hands.push(hand);
            }
        }
        let hands = deduplicate(hands, DUPLICATE_DISTANCE, self.max_hands);
        log::debug!("hand landmarker: {} hands", hands.len());
        Ok(hands)
    }
}

impl LandmarkSource for HandLandmarker {
    fn detect(&mut self, frame: &Image) -> Result<Vec<HandObservation>, GestureError> {
        Ok(self.estimate(frame)?)
    }
}
