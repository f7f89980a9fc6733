use {
    super::{
        LANDMARK_VALUES,
        preprocess::{LetterboxInfo, Region},
    },
    crate::InferError,
    base::{Tensor, Vec2, Vec3},
    gesture::{HandObservation, Handedness},
};

/// Interpret a model score as a probability. Raw logits are squashed with a sigmoid.
pub fn to_probability(value: f32) -> f32 {
    if (0.0..=1.0).contains(&value) {
        value
    } else {
        1.0 / (1.0 + (-value).exp())
    }
}

/// Turn one region's model output into a hand, or `None` below `conf_threshold`.
///
/// `landmarks` holds 21 x/y/z triples in model input pixels. They are mapped
/// through the letterbox and region back to coordinates normalized by the
/// full frame; z is normalized by the frame width like x.
pub fn postprocess(
    landmarks: &Tensor<f32>,
    presence: f32,
    right_handed: f32,
    letterbox: &LetterboxInfo,
    region: Region,
    frame_size: Vec2<usize>,
    conf_threshold: f32,
) -> Result<Option<HandObservation>, InferError> {
    if landmarks.len() != LANDMARK_VALUES {
        return Err(InferError::ShapeMismatch {
            expected: format!("{} landmark values", LANDMARK_VALUES),
            got: format!("{:?}", landmarks.shape),
        });
    }

    let score = to_probability(presence);
    if score < conf_threshold {
        return Ok(None);
    }

    let frame_w = frame_size.x.max(1) as f32;
    let frame_h = frame_size.y.max(1) as f32;
    let points: Vec<Vec3<f32>> = landmarks
        .data
        .chunks_exact(3)
        .map(|p| {
            let x = (p[0] - letterbox.pad_x) / letterbox.scale + region.origin.x as f32;
            let y = (p[1] - letterbox.pad_y) / letterbox.scale + region.origin.y as f32;
            let z = p[2] / letterbox.scale;
            Vec3::new(x / frame_w, y / frame_h, z / frame_w)
        })
        .collect();

    let handedness = if to_probability(right_handed) > 0.5 {
        Handedness::Right
    } else {
        Handedness::Left
    };
    let hand = HandObservation::from_landmarks(handedness, &points)
        .map_err(|e| InferError::ShapeMismatch {
            expected: format!("{} landmark values", LANDMARK_VALUES),
            got: e.to_string(),
        })?
        .with_score(score);
    Ok(Some(hand))
}

/// Drop detections of the same hand seen from overlapping regions.
///
/// Two hands whose wrists are closer than `min_distance` (normalized, in the
/// image plane) are the same hand; the higher score stays in the slot of the
/// earlier one. At most `max_hands` are returned, in detection order.
pub fn deduplicate(
    hands: Vec<HandObservation>,
    min_distance: f32,
    max_hands: usize,
) -> Vec<HandObservation> {
    let mut kept: Vec<HandObservation> = Vec::with_capacity(hands.len());
    for hand in hands {
        match kept
            .iter_mut()
            .find(|other| other.wrist().planar_distance(hand.wrist()) < min_distance)
        {
            Some(other) => {
                if hand.score() > other.score() {
                    *other = hand;
                }
            }
            None => kept.push(hand),
        }
    }
    kept.truncate(max_hands);
    kept
}
