//! Single-hand pose checks.
//!
//! All comparisons are on normalized landmark coordinates. "Above" means a
//! smaller y.

use crate::HandObservation;

// middle fingertip must clear the wrist by this much to count as raised
pub const RAISED_MARGIN: f32 = 0.1;

// middle fingertip this much closer to the camera than the wrist is a tilt
pub const TILT_DEPTH: f32 = 0.05;

pub const INDEX_EXTENDED_MARGIN: f32 = 0.05;
pub const INDEX_UP_MARGIN: f32 = 0.15;
pub const POINT_CLOSED_MARGIN: f32 = 0.02;

pub const L_MIDDLE_CLOSED_MARGIN: f32 = 0.03;
pub const L_RING_WRIST_MARGIN: f32 = 0.05;
pub const THUMB_SIDEWAYS: f32 = 0.08;
pub const THUMB_LEVEL: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tilt {
    Vertical,
    Inclined,
}

pub fn is_raised(hand: &HandObservation) -> bool {
    hand.middle_tip().y < hand.wrist().y - RAISED_MARGIN
}

/// Whether the hand leans toward the camera. Only meaningful for a raised hand.
pub fn tilt(hand: &HandObservation) -> Tilt {
    if hand.middle_tip().z - hand.wrist().z < -TILT_DEPTH {
        Tilt::Inclined
    } else {
        Tilt::Vertical
    }
}

fn index_extended(hand: &HandObservation) -> bool {
    hand.index_tip().y < hand.index_mcp().y - INDEX_EXTENDED_MARGIN
}

/// Index finger up with the middle or ring finger folded.
pub fn is_pointing_up(hand: &HandObservation) -> bool {
    let index_up = hand.index_tip().y < hand.wrist().y - INDEX_UP_MARGIN;
    let middle_closed = hand.middle_tip().y > hand.middle_mcp().y - POINT_CLOSED_MARGIN;
    let ring_closed = hand.ring_tip().y > hand.ring_mcp().y - POINT_CLOSED_MARGIN;
    index_extended(hand) && index_up && (middle_closed || ring_closed)
}

/// Index up and thumb out to the side, roughly level.
pub fn is_l_shape(hand: &HandObservation) -> bool {
    let thumb_sideways = (hand.thumb_tip().x - hand.wrist().x).abs() > THUMB_SIDEWAYS;
    let thumb_level = (hand.thumb_tip().y - hand.thumb_ip().y).abs() < THUMB_LEVEL;
    let middle_closed = hand.middle_tip().y > hand.middle_mcp().y - L_MIDDLE_CLOSED_MARGIN;
    // ring is compared against the wrist, not its own knuckle
    let ring_closed = hand.ring_tip().y > hand.wrist().y - L_RING_WRIST_MARGIN;
    index_extended(hand) && thumb_sideways && thumb_level && (middle_closed || ring_closed)
}
