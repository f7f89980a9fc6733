//! Image handling for the gesture display.
//!
//! Frames and assets are carried as [`Image`]: a size, a raw byte buffer and
//! the [`PixelFormat`] describing it. Camera formats (YUYV, MJPEG) are
//! converted to packed RGB before landmark detection, and RGB is packed into
//! `0xAARRGGBB` words for display.

pub mod error;
pub use error::ImageError;

mod decode;
pub use decode::*;

mod image;
pub use image::*;

mod pixelformat;
pub use pixelformat::*;

mod rgb;
pub use rgb::*;

mod transform;
pub use transform::*;

mod packed;
pub use packed::*;
