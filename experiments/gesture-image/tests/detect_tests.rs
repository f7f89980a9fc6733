mod detect {
    include!("../src/detect.rs");
}

use {
    base::{Vec2, Vec3},
    detect::*,
    gesture::{GestureError, HandObservation, Handedness, LandmarkSource},
    image::{Image, PixelFormat},
};

// fails on the frames listed in `failing`, otherwise reports one left hand
struct FlakySource {
    frame: usize,
    failing: Vec<usize>,
}

impl LandmarkSource for FlakySource {
    fn detect(&mut self, _frame: &Image) -> Result<Vec<HandObservation>, GestureError> {
        let frame = self.frame;
        self.frame += 1;
        if self.failing.contains(&frame) {
            return Err(GestureError::Source("inference failed".to_string()));
        }
        let landmarks = [Vec3::new(0.5, 0.5, 0.0); 21];
        let hand = HandObservation::from_landmarks(Handedness::Left, &landmarks)?;
        Ok(vec![hand])
    }
}

fn frame() -> Image {
    Image::new(Vec2::new(4, 2), vec![0; 24], PixelFormat::Rgb8)
}

#[test]
fn test_source_error_gives_no_hands() {
    let mut source = FlakySource {
        frame: 0,
        failing: vec![0],
    };
    assert!(detect_hands(&mut source, &frame()).is_empty());
}

#[test]
fn test_detection_continues_after_error() {
    let mut source = FlakySource {
        frame: 0,
        failing: vec![1],
    };
    let counts: Vec<usize> = (0..3)
        .map(|_| detect_hands(&mut source, &frame()).len())
        .collect();
    assert_eq!(counts, vec![1, 0, 1]);
}

#[test]
fn test_boxed_source() {
    let mut source: Box<dyn LandmarkSource> = Box::new(FlakySource {
        frame: 0,
        failing: vec![],
    });
    let hands = detect_hands(source.as_mut(), &frame());
    assert_eq!(hands.len(), 1);
    assert_eq!(hands[0].handedness(), Handedness::Left);
}
