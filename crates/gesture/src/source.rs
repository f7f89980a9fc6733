use {crate::*, image::Image};

/// Anything that finds hands in a camera frame.
pub trait LandmarkSource {
    /// Detect hands in an RGB8 frame. Returns an empty list when there are none.
    fn detect(&mut self, frame: &Image) -> Result<Vec<HandObservation>, GestureError>;
}

impl<T: LandmarkSource + ?Sized> LandmarkSource for Box<T> {
    fn detect(&mut self, frame: &Image) -> Result<Vec<HandObservation>, GestureError> {
        (**self).detect(frame)
    }
}
