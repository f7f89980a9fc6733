use {crate::*, base::Vec2, image::PixelFormat};

#[derive(Debug, Clone)]
pub enum VideoInConfig {
    #[cfg(feature = "v4l2")]
    V4l2(v4l2::V4l2Config),
    #[cfg(test)]
    Mock(tests::MockConfig),
}

/// Resolved capture parameters reported by a device after opening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoInParams {
    pub size: Vec2<usize>,
    pub format: PixelFormat,
    pub frame_rate: f32,
}

pub(crate) trait VideoInDevice {
    fn open(&mut self, config: &VideoInConfig) -> Result<VideoInParams, VideoError>; // open the device, return what was actually set
    fn close(&mut self); // close the device, if open
    fn blocking_capture(&mut self) -> Result<VideoFrame, VideoError>; // capture a frame
}

/// A single open camera.
///
/// Capturing blocks the caller until the next frame is available. There is no
/// reconnect: once `capture` fails the caller should treat the stream as ended.
pub struct VideoIn {
    device: Box<dyn VideoInDevice>,
    params: VideoInParams,
}

impl VideoIn {
    #[allow(unreachable_code, unused_variables)]
    fn default_config() -> Result<VideoInConfig, VideoError> {
        #[cfg(feature = "v4l2")]
        return Ok(VideoInConfig::V4l2(v4l2::V4l2Config::default()));
        Err(VideoError::Device(
            "no capture backend compiled in".to_string(),
        ))
    }

    fn create_device(config: &VideoInConfig) -> Box<dyn VideoInDevice> {
        match config {
            #[cfg(feature = "v4l2")]
            VideoInConfig::V4l2(_) => Box::new(v4l2::V4l2::new()),
            #[cfg(test)]
            VideoInConfig::Mock(config) => Box::new(tests::MockDevice::new(config.clone())),
        }
    }

    /// Open the camera described by `config`, or the platform default.
    pub fn open(config: Option<VideoInConfig>) -> Result<Self, VideoError> {
        let config = match config {
            Some(config) => config,
            None => Self::default_config()?,
        };
        let device = Self::create_device(&config);
        Self::with_device(device, &config)
    }

    pub(crate) fn with_device(
        mut device: Box<dyn VideoInDevice>,
        config: &VideoInConfig,
    ) -> Result<Self, VideoError> {
        let params = device.open(config)?;
        log::info!(
            "video: opened {}x{} {:?} at {:.1} fps",
            params.size.x,
            params.size.y,
            params.format,
            params.frame_rate
        );
        Ok(Self { device, params })
    }

    pub fn size(&self) -> Vec2<usize> {
        self.params.size
    }

    pub fn capture(&mut self) -> Result<VideoFrame, VideoError> {
        self.device.blocking_capture()
    }
}

impl Drop for VideoIn {
    fn drop(&mut self) {
        self.device.close();
    }
}

#[cfg(feature = "v4l2")]
pub mod v4l2;
