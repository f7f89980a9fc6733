use {
    crate::*,
    base::Vec3,
    std::{fmt, str::FromStr},
};

/// Number of landmarks in a hand skeleton
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Hand landmark indices, wrist first, then each finger from base to tip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandLandmark {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl From<HandLandmark> for usize {
    fn from(landmark: HandLandmark) -> usize {
        landmark as usize
    }
}

/// Bones of the hand skeleton as pairs of landmarks
pub const HAND_CONNECTIONS: [(HandLandmark, HandLandmark); 21] = {
    use HandLandmark::*;
    [
        (Wrist, ThumbCmc),
        (ThumbCmc, ThumbMcp),
        (ThumbMcp, ThumbIp),
        (ThumbIp, ThumbTip),
        (Wrist, IndexMcp),
        (IndexMcp, IndexPip),
        (IndexPip, IndexDip),
        (IndexDip, IndexTip),
        (IndexMcp, MiddleMcp),
        (MiddleMcp, MiddlePip),
        (MiddlePip, MiddleDip),
        (MiddleDip, MiddleTip),
        (MiddleMcp, RingMcp),
        (RingMcp, RingPip),
        (RingPip, RingDip),
        (RingDip, RingTip),
        (RingMcp, PinkyMcp),
        (Wrist, PinkyMcp),
        (PinkyMcp, PinkyPip),
        (PinkyPip, PinkyDip),
        (PinkyDip, PinkyTip),
    ]
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handedness {
    Left,
    Right,
}

impl FromStr for Handedness {
    type Err = GestureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Left" | "left" => Ok(Handedness::Left),
            "Right" | "right" => Ok(Handedness::Right),
            _ => Err(GestureError::UnknownHandedness(s.to_string())),
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handedness::Left => write!(f, "Left"),
            Handedness::Right => write!(f, "Right"),
        }
    }
}

/// One detected hand: 21 normalized landmarks and which hand it is.
///
/// x and y are fractions of the frame width and height with y growing
/// downward; z is depth relative to the wrist, more negative is closer to the
/// camera. Built only through `from_landmarks`, so every observation has a
/// full skeleton.
#[derive(Debug, Clone, PartialEq)]
pub struct HandObservation {
    handedness: Handedness,
    score: f32,
    landmarks: [Vec3<f32>; HAND_LANDMARK_COUNT],
}

impl HandObservation {
    pub fn from_landmarks(
        handedness: Handedness,
        landmarks: &[Vec3<f32>],
    ) -> Result<Self, GestureError> {
        let landmarks: [Vec3<f32>; HAND_LANDMARK_COUNT] =
            landmarks
                .try_into()
                .map_err(|_| GestureError::InvalidLandmarks {
                    expected: HAND_LANDMARK_COUNT,
                    got: landmarks.len(),
                })?;
        Ok(Self {
            handedness,
            score: 1.0,
            landmarks,
        })
    }

    /// Set the detection confidence (builder pattern)
    pub fn with_score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn landmark(&self, landmark: HandLandmark) -> Vec3<f32> {
        self.landmarks[usize::from(landmark)]
    }

    pub fn landmarks(&self) -> &[Vec3<f32>; HAND_LANDMARK_COUNT] {
        &self.landmarks
    }

    pub fn wrist(&self) -> Vec3<f32> {
        self.landmark(HandLandmark::Wrist)
    }

    pub fn thumb_ip(&self) -> Vec3<f32> {
        self.landmark(HandLandmark::ThumbIp)
    }

    pub fn thumb_tip(&self) -> Vec3<f32> {
        self.landmark(HandLandmark::ThumbTip)
    }

    pub fn index_mcp(&self) -> Vec3<f32> {
        self.landmark(HandLandmark::IndexMcp)
    }

    pub fn index_tip(&self) -> Vec3<f32> {
        self.landmark(HandLandmark::IndexTip)
    }

    pub fn middle_mcp(&self) -> Vec3<f32> {
        self.landmark(HandLandmark::MiddleMcp)
    }

    pub fn middle_tip(&self) -> Vec3<f32> {
        self.landmark(HandLandmark::MiddleTip)
    }

    pub fn ring_mcp(&self) -> Vec3<f32> {
        self.landmark(HandLandmark::RingMcp)
    }

    pub fn ring_tip(&self) -> Vec3<f32> {
        self.landmark(HandLandmark::RingTip)
    }
}
