use {
    crate::{predicates::*, *},
    std::{fmt, str::FromStr},
};

/// Recognized gestures, in the order their keywords are matched against asset names
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GestureLabel {
    Vertical,
    Inclined,
    PointingLeft,
    LRight,
}

impl GestureLabel {
    pub const ALL: [GestureLabel; 4] = [
        GestureLabel::Vertical,
        GestureLabel::Inclined,
        GestureLabel::PointingLeft,
        GestureLabel::LRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GestureLabel::Vertical => "vertical",
            GestureLabel::Inclined => "inclined",
            GestureLabel::PointingLeft => "pointing_left",
            GestureLabel::LRight => "L_right",
        }
    }

    /// Text shown in the overlay.
    pub fn display_name(&self) -> &'static str {
        match self {
            GestureLabel::Vertical => "TWO HANDS STRAIGHT",
            GestureLabel::Inclined => "TWO HANDS TILTED",
            GestureLabel::PointingLeft => "POINTING",
            GestureLabel::LRight => "MAKING L",
        }
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GestureLabel {
    type Err = GestureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GestureLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| GestureError::UnknownGesture(s.to_string()))
    }
}

/// Predicate results for one hand, kept for the debug overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandReport {
    pub handedness: Handedness,
    pub pointing_up: bool,
    pub l_shape: bool,
}

impl HandReport {
    pub fn new(hand: &HandObservation) -> Self {
        Self {
            handedness: hand.handedness(),
            pointing_up: is_pointing_up(hand),
            l_shape: is_l_shape(hand),
        }
    }
}

impl fmt::Display for HandReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Point={} L={}",
            self.handedness, self.pointing_up, self.l_shape
        )
    }
}

/// Everything the presentation layer needs to know about one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameAnalysis {
    pub label: Option<GestureLabel>,
    pub hands_detected: usize,
    pub reports: Vec<HandReport>,
}

// single-hand gestures, first matching hand in detection order wins
fn single_hand_gesture(reports: &[HandReport]) -> Option<GestureLabel> {
    for report in reports {
        if report.handedness == Handedness::Left && report.pointing_up {
            return Some(GestureLabel::PointingLeft);
        }
        if report.handedness == Handedness::Right && report.l_shape {
            return Some(GestureLabel::LRight);
        }
    }
    None
}

// two raised hands agreeing on their tilt
fn two_hand_gesture(hands: &[HandObservation]) -> Option<GestureLabel> {
    if hands.len() < 2 {
        return None;
    }
    let tilts: Vec<Tilt> = hands
        .iter()
        .filter(|hand| is_raised(hand))
        .map(tilt)
        .collect();
    if tilts.len() < 2 {
        return None;
    }
    if tilts.iter().all(|t| *t == Tilt::Vertical) {
        Some(GestureLabel::Vertical)
    } else if tilts.iter().all(|t| *t == Tilt::Inclined) {
        Some(GestureLabel::Inclined)
    } else {
        None
    }
}

/// Classify the hands of one frame.
///
/// A left hand pointing up or a right hand making an L takes priority, checked
/// hand by hand in the order the source reported them. Otherwise two or more
/// raised hands with the same tilt give `Vertical` or `Inclined`.
pub fn analyze(hands: &[HandObservation]) -> FrameAnalysis {
    let reports: Vec<HandReport> = hands.iter().map(HandReport::new).collect();
    let label = single_hand_gesture(&reports).or_else(|| two_hand_gesture(hands));
    FrameAnalysis {
        label,
        hands_detected: hands.len(),
        reports,
    }
}

pub fn classify(hands: &[HandObservation]) -> Option<GestureLabel> {
    analyze(hands).label
}
