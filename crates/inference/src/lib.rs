//! ONNX hand landmark detection.

mod device;
pub use device::*;

mod error;
pub use error::*;

mod session;
pub use session::*;

pub mod hand;
pub use hand::HandLandmarker;
