//! Hand landmark model pipeline: crop and letterbox, run, map back to the frame.

mod landmarker;
pub use landmarker::*;

pub mod postprocess;
pub mod preprocess;

/// Side of the square model input, in pixels
pub const INPUT_SIZE: usize = 224;

/// Values in the landmark output, x/y/z for each of the 21 landmarks
pub const LANDMARK_VALUES: usize = gesture::HAND_LANDMARK_COUNT * 3;
