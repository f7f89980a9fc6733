use {
    gesture::{HandObservation, LandmarkSource},
    image::Image,
};

/// Hands found in `frame`. A failing source counts as no hands for this frame.
pub fn detect_hands(source: &mut dyn LandmarkSource, frame: &Image) -> Vec<HandObservation> {
    source.detect(frame).unwrap_or_else(|error| {
        log::warn!("landmark detection failed, no hands this frame: {}", error);
        Vec::new()
    })
}
