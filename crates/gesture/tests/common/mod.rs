#![allow(dead_code)]

use {
    base::Vec3,
    gesture::{HAND_LANDMARK_COUNT, HandLandmark, HandObservation, Handedness},
};

/// Builds test hands starting from every landmark at the frame center.
pub struct HandBuilder {
    handedness: Handedness,
    landmarks: Vec<Vec3<f32>>,
}

impl HandBuilder {
    pub fn new(handedness: Handedness) -> Self {
        Self {
            handedness,
            landmarks: vec![Vec3::new(0.5, 0.5, 0.0); HAND_LANDMARK_COUNT],
        }
    }

    pub fn at(mut self, landmark: HandLandmark, x: f32, y: f32, z: f32) -> Self {
        self.landmarks[usize::from(landmark)] = Vec3::new(x, y, z);
        self
    }

    pub fn build(self) -> HandObservation {
        HandObservation::from_landmarks(self.handedness, &self.landmarks).unwrap()
    }
}

/// Index up, middle and ring folded, thumb tucked under the palm.
pub fn pointing_hand(handedness: Handedness) -> HandObservation {
    HandBuilder::new(handedness)
        .at(HandLandmark::Wrist, 0.5, 0.8, 0.0)
        .at(HandLandmark::ThumbIp, 0.5, 0.72, 0.0)
        .at(HandLandmark::ThumbTip, 0.52, 0.7, 0.0)
        .at(HandLandmark::IndexMcp, 0.5, 0.6, 0.0)
        .at(HandLandmark::IndexTip, 0.5, 0.4, 0.0)
        .at(HandLandmark::MiddleMcp, 0.55, 0.6, 0.0)
        .at(HandLandmark::MiddleTip, 0.55, 0.65, 0.0)
        .at(HandLandmark::RingMcp, 0.6, 0.62, 0.0)
        .at(HandLandmark::RingTip, 0.6, 0.68, 0.0)
        .build()
}

/// Index up with the thumb stretched out level to the side.
pub fn l_hand(handedness: Handedness) -> HandObservation {
    HandBuilder::new(handedness)
        .at(HandLandmark::Wrist, 0.5, 0.8, 0.0)
        .at(HandLandmark::ThumbIp, 0.6, 0.65, 0.0)
        .at(HandLandmark::ThumbTip, 0.7, 0.66, 0.0)
        .at(HandLandmark::IndexMcp, 0.5, 0.6, 0.0)
        .at(HandLandmark::IndexTip, 0.5, 0.4, 0.0)
        .at(HandLandmark::MiddleMcp, 0.45, 0.6, 0.0)
        .at(HandLandmark::MiddleTip, 0.45, 0.65, 0.0)
        .at(HandLandmark::RingMcp, 0.42, 0.62, 0.0)
        .at(HandLandmark::RingTip, 0.42, 0.78, 0.0)
        .build()
}

/// Open raised palm. `tip_z` is the middle fingertip depth relative to the wrist.
pub fn open_hand(handedness: Handedness, tip_z: f32) -> HandObservation {
    HandBuilder::new(handedness)
        .at(HandLandmark::Wrist, 0.5, 0.8, 0.0)
        .at(HandLandmark::ThumbIp, 0.5, 0.72, 0.0)
        .at(HandLandmark::ThumbTip, 0.52, 0.7, 0.0)
        .at(HandLandmark::IndexMcp, 0.45, 0.6, 0.0)
        .at(HandLandmark::IndexTip, 0.45, 0.42, 0.0)
        .at(HandLandmark::MiddleMcp, 0.5, 0.6, 0.0)
        .at(HandLandmark::MiddleTip, 0.5, 0.4, tip_z)
        .at(HandLandmark::RingMcp, 0.55, 0.6, 0.0)
        .at(HandLandmark::RingTip, 0.55, 0.42, 0.0)
        .build()
}

/// Hand hanging down with every finger below the wrist.
pub fn lowered_hand(handedness: Handedness) -> HandObservation {
    HandBuilder::new(handedness)
        .at(HandLandmark::Wrist, 0.5, 0.5, 0.0)
        .at(HandLandmark::IndexMcp, 0.45, 0.6, 0.0)
        .at(HandLandmark::IndexTip, 0.45, 0.8, 0.0)
        .at(HandLandmark::MiddleMcp, 0.5, 0.6, 0.0)
        .at(HandLandmark::MiddleTip, 0.5, 0.8, 0.0)
        .at(HandLandmark::RingMcp, 0.55, 0.6, 0.0)
        .at(HandLandmark::RingTip, 0.55, 0.8, 0.0)
        .build()
}

pub fn degenerate_hand(handedness: Handedness) -> HandObservation {
    HandBuilder::new(handedness).build()
}
