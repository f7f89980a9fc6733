use {
    crate::*,
    base::Vec3,
    image::Image,
    serde::Deserialize,
    std::{
        collections::VecDeque,
        fs::File,
        io::{BufRead, BufReader},
        path::Path,
    },
};

#[derive(Debug, Deserialize)]
struct PointRecord {
    x: f32,
    y: f32,
    #[serde(default)]
    z: f32,
}

#[derive(Debug, Deserialize)]
struct HandRecord {
    handedness: Option<String>,
    #[serde(default = "default_score")]
    score: f32,
    landmarks: Vec<PointRecord>,
}

fn default_score() -> f32 {
    1.0
}

#[derive(Debug, Deserialize)]
struct FrameRecord {
    #[serde(default)]
    hands: Vec<HandRecord>,
}

fn parse_frame(record: FrameRecord) -> Result<Vec<HandObservation>, GestureError> {
    let mut hands = Vec::with_capacity(record.hands.len());
    for hand in record.hands {
        // without handedness the frame is unusable
        let Some(handedness) = hand.handedness else {
            return Ok(Vec::new());
        };
        let handedness = handedness.parse::<Handedness>()?;
        let landmarks: Vec<Vec3<f32>> = hand
            .landmarks
            .iter()
            .map(|point| Vec3::new(point.x, point.y, point.z))
            .collect();
        hands.push(HandObservation::from_landmarks(handedness, &landmarks)?.with_score(hand.score));
    }
    Ok(hands)
}

/// Landmark source that plays back frames recorded as JSON lines.
///
/// Each non-empty line is one frame:
/// `{"hands":[{"handedness":"Left","score":0.9,"landmarks":[{"x":0.5,"y":0.4,"z":0.0}, ...]}]}`.
/// The camera frame passed to `detect` is ignored. Once every recorded frame
/// has been returned, `detect` keeps returning no hands.
pub struct ReplaySource {
    frames: VecDeque<Vec<HandObservation>>,
}

impl ReplaySource {
    pub fn from_reader(reader: impl BufRead) -> Result<Self, GestureError> {
        let mut frames = VecDeque::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: FrameRecord = serde_json::from_str(&line)
                .map_err(|e| GestureError::Parse(format!("line {}: {}", index + 1, e)))?;
            let hands = parse_frame(record).map_err(|e| match e {
                GestureError::InvalidLandmarks { expected, got } => GestureError::Parse(format!(
                    "line {}: expected {} landmarks, got {}",
                    index + 1,
                    expected,
                    got
                )),
                other => other,
            })?;
            frames.push_back(hands);
        }
        Ok(Self { frames })
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, GestureError> {
        let path = path.as_ref();
        let source = Self::from_reader(BufReader::new(File::open(path)?))?;
        log::info!("replay: loaded {} frames from {:?}", source.remaining(), path);
        Ok(source)
    }

    /// Frames not yet returned
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl LandmarkSource for ReplaySource {
    fn detect(&mut self, _frame: &Image) -> Result<Vec<HandObservation>, GestureError> {
        Ok(self.frames.pop_front().unwrap_or_default())
    }
}
