use gesture::{AssetMap, FrameAnalysis, GestureLabel};

/// Decides which asset, if any, is on screen.
///
/// An asset is shown only while the current frame's gesture has one mapped to
/// it. The last mapped gesture is remembered even after the asset is hidden.
pub struct Presenter {
    map: AssetMap,
    last_gesture: Option<GestureLabel>,
    shown: Option<usize>,
}

impl Presenter {
    pub fn new(map: AssetMap) -> Self {
        Self {
            map,
            last_gesture: None,
            shown: None,
        }
    }

    /// Feed this frame's gesture. Returns the asset index to show, if any.
    pub fn update(&mut self, label: Option<GestureLabel>) -> Option<usize> {
        self.shown = label.and_then(|label| {
            let index = self.map.get(label)?;
            self.last_gesture = Some(label);
            Some(index)
        });
        self.shown
    }

    pub fn last_gesture(&self) -> Option<GestureLabel> {
        self.last_gesture
    }

    pub fn status_text(&self, names: &[String]) -> String {
        match self.shown.and_then(|index| names.get(index)) {
            Some(name) => format!("Showing: {}", name),
            None => "Make a gesture!".to_string(),
        }
    }
}

/// One-line overlay for the camera window title.
pub fn overlay_text(analysis: &FrameAnalysis, status: &str) -> String {
    let mut parts = vec![format!("Hands: {}", analysis.hands_detected), status.to_string()];
    if let Some(label) = analysis.label {
        parts.push(format!("Gesture: {}", label.display_name()));
    }
    parts.extend(analysis.reports.iter().map(|report| report.to_string()));
    parts.join(" | ")
}
