use {crate::Device, gesture::GestureError, std::fmt};

#[derive(Debug)]
pub enum InferError {
    ModelLoad(String),
    Backend(String),
    ShapeMismatch { expected: String, got: String },
    UnsupportedDevice(Device),
    InvalidDevice(String),
    Image(image::ImageError),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            InferError::Backend(msg) => write!(f, "backend error: {msg}"),
            InferError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected}, got {got}")
            }
            InferError::UnsupportedDevice(device) => write!(f, "unsupported device: {device}"),
            InferError::InvalidDevice(name) => {
                write!(f, "invalid device '{name}', expected cpu, cuda or cuda:<id>")
            }
            InferError::Image(err) => write!(f, "image error: {err}"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<image::ImageError> for InferError {
    fn from(err: image::ImageError) -> Self {
        InferError::Image(err)
    }
}

impl From<ort::Error> for InferError {
    fn from(err: ort::Error) -> Self {
        InferError::Backend(err.to_string())
    }
}

impl From<InferError> for GestureError {
    fn from(err: InferError) -> Self {
        GestureError::Source(err.to_string())
    }
}
