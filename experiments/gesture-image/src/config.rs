use {
    inference::{Device, InferError},
    std::path::PathBuf,
};

/// Longer side of a displayed asset, in pixels
pub const MAX_ASSET_SIZE: usize = 500;

/// Minimum hand presence for a detection to count
pub const CONFIDENCE_THRESHOLD: f32 = 0.5;

pub const MAX_HANDS: usize = 2;

pub const ENV_ASSET_DIR: &str = "GESTURE_ASSET_DIR";
pub const ENV_ASSET_MAP: &str = "GESTURE_ASSET_MAP";
pub const ENV_MODEL_PATH: &str = "GESTURE_MODEL_PATH";
pub const ENV_REPLAY: &str = "GESTURE_REPLAY";
pub const ENV_CAMERA: &str = "GESTURE_CAMERA";
pub const ENV_DEVICE: &str = "GESTURE_DEVICE";
pub const ENV_LOG_DIR: &str = "GESTURE_LOG_DIR";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Folder scanned for asset images
    pub asset_dir: PathBuf,
    /// JSON file binding labels to asset paths, replaces folder scanning
    pub asset_map: Option<PathBuf>,
    pub model_path: PathBuf,
    /// Recorded landmarks to play back instead of running the model
    pub replay: Option<PathBuf>,
    /// V4L2 device, first camera when unset
    pub camera: Option<PathBuf>,
    /// Where the hand model runs
    pub device: Device,
    /// Log to daily files here instead of stdout
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("images"),
            asset_map: None,
            model_path: PathBuf::from("models/hand_landmark.onnx"),
            replay: None,
            camera: None,
            device: Device::Cpu,
            log_dir: None,
        }
    }
}

impl AppConfig {
    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    pub fn with_asset_map(mut self, path: impl Into<PathBuf>) -> Self {
        self.asset_map = Some(path.into());
        self
    }

    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }

    pub fn with_replay(mut self, path: impl Into<PathBuf>) -> Self {
        self.replay = Some(path.into());
        self
    }

    pub fn with_camera(mut self, path: impl Into<PathBuf>) -> Self {
        self.camera = Some(path.into());
        self
    }

    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Defaults overridden by whatever `lookup` returns. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, InferError> {
        let value = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let get = |key: &str| value(key).map(PathBuf::from);
        let mut config = Self::default();
        if let Some(dir) = get(ENV_ASSET_DIR) {
            config = config.with_asset_dir(dir);
        }
        if let Some(path) = get(ENV_ASSET_MAP) {
            config = config.with_asset_map(path);
        }
        if let Some(path) = get(ENV_MODEL_PATH) {
            config = config.with_model_path(path);
        }
        if let Some(path) = get(ENV_REPLAY) {
            config = config.with_replay(path);
        }
        if let Some(path) = get(ENV_CAMERA) {
            config = config.with_camera(path);
        }
        if let Some(device) = value(ENV_DEVICE) {
            config = config.with_device(device.parse()?);
        }
        if let Some(dir) = get(ENV_LOG_DIR) {
            config = config.with_log_dir(dir);
        }
        Ok(config)
    }

    pub fn from_env() -> Result<Self, InferError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}
