use {crate::*, image::Image};

#[derive(Debug, Clone)]
pub struct VideoFrame {
    pub color: Image,
}

impl VideoFrame {
    /// Color plane converted to RGB8, whatever the capture format.
    pub fn to_rgb(&self) -> Result<Image, VideoError> {
        Ok(image::to_rgb(&self.color)?)
    }
}
