//! Hand gesture recognition.
//!
//! A `LandmarkSource` turns a camera frame into `HandObservation`s. The
//! predicates in `predicates` look at one hand at a time, and `analyze`
//! combines every hand of a frame into at most one `GestureLabel`. `AssetMap`
//! ties labels to the images the driver shows.

pub mod error;
pub use error::GestureError;

mod landmark;
pub use landmark::*;

pub mod predicates;
pub use predicates::Tilt;

mod classifier;
pub use classifier::*;

mod assets;
pub use assets::*;

mod source;
pub use source::*;

mod replay;
pub use replay::*;
