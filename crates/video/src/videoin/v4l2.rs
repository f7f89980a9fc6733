use {
    crate::*,
    base::Vec2,
    image::{Image, PixelFormat},
    std::path::PathBuf,
    v4l::{
        Device, buffer::Type, io::mmap::Stream as MmapStream, io::traits::CaptureStream,
        video::Capture,
    },
};

// number of mmap buffers queued with the driver
const BUFFER_COUNT: u32 = 4;

/// Capture device selection. The device keeps its current size and format.
#[derive(Debug, Clone, Default)]
pub struct V4l2Config {
    pub path: Option<PathBuf>,
}

impl V4l2Config {
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

pub(crate) struct V4l2 {
    stream: Option<MmapStream<'static>>,
    size: Vec2<usize>,
    format: PixelFormat,
}

impl V4l2 {
    pub fn new() -> Self {
        Self {
            stream: None,
            size: Vec2::new(0, 0),
            format: PixelFormat::Yuyv,
        }
    }
}

impl VideoInDevice for V4l2 {
    fn open(&mut self, config: &VideoInConfig) -> Result<VideoInParams, VideoError> {
        self.stream.take();

        #[allow(irrefutable_let_patterns)]
        let VideoInConfig::V4l2(config) = config else {
            return Err(VideoError::Device(
                "V4l2::open should be called with VideoInConfig::V4l2".to_string(),
            ));
        };

        let device = match &config.path {
            Some(path) => Device::with_path(path)?,
            None => Device::new(0)?,
        };
        let current = Capture::format(&device)?;
        self.size = Vec2::new(current.width as usize, current.height as usize);
        self.format = match PixelFormat::from_fourcc(u32::from_le_bytes(current.fourcc.repr)) {
            Ok(format) if format != PixelFormat::Rgb8 => format,
            _ => {
                return Err(VideoError::Device(format!(
                    "Unsupported pixel format: {}, expected YUYV or MJPG",
                    current.fourcc
                )));
            }
        };

        let params = Capture::params(&device)?;
        let frame_rate =
            params.interval.denominator as f32 / params.interval.numerator.max(1) as f32;

        self.stream = Some(
            MmapStream::with_buffers(&device, Type::VideoCapture, BUFFER_COUNT)
                .map_err(|error| VideoError::Stream(error.to_string()))?,
        );

        Ok(VideoInParams {
            size: self.size,
            format: self.format,
            frame_rate,
        })
    }

    fn close(&mut self) {
        self.stream.take();
    }

    fn blocking_capture(&mut self) -> Result<VideoFrame, VideoError> {
        let Some(stream) = self.stream.as_mut() else {
            return Err(VideoError::Stream("No stream".to_string()));
        };
        let (frame_data, _metadata) =
            CaptureStream::next(stream).map_err(|error| VideoError::Stream(error.to_string()))?;
        Ok(VideoFrame {
            color: Image::new(self.size, frame_data.to_vec(), self.format),
        })
    }
}
