use {
    gesture::{HAND_CONNECTIONS, HandObservation},
    image::Image,
};

const BONE_COLOR: [u8; 3] = [0, 255, 0];
const JOINT_COLOR: [u8; 3] = [255, 0, 0];
const JOINT_RADIUS: i32 = 3;

// Cohen-Sutherland region bits
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

type Point = (i64, i64);

fn region((x, y): Point, width: i64, height: i64) -> u8 {
    let mut bits = 0;
    if x < 0 {
        bits |= LEFT;
    } else if x >= width {
        bits |= RIGHT;
    }
    if y < 0 {
        bits |= TOP;
    } else if y >= height {
        bits |= BOTTOM;
    }
    bits
}

// `from + span * num / den`, with the product taken in i128
fn interpolate(from: i64, span: i64, num: i64, den: i64) -> i64 {
    from + (span as i128 * num as i128 / den as i128) as i64
}

/// Clip a segment to the `width` x `height` frame, None when nothing of it is visible.
fn clip_segment(
    mut p0: Point,
    mut p1: Point,
    width: i64,
    height: i64,
) -> Option<(Point, Point)> {
    loop {
        let r0 = region(p0, width, height);
        let r1 = region(p1, width, height);
        if r0 | r1 == 0 {
            return Some((p0, p1));
        }
        if r0 & r1 != 0 {
            return None;
        }

        let outside = if r0 != 0 { r0 } else { r1 };
        let ((x0, y0), (x1, y1)) = (p0, p1);
        let edge = if outside & TOP != 0 {
            (interpolate(x0, x1 - x0, -y0, y1 - y0), 0)
        } else if outside & BOTTOM != 0 {
            (interpolate(x0, x1 - x0, height - 1 - y0, y1 - y0), height - 1)
        } else if outside & LEFT != 0 {
            (0, interpolate(y0, y1 - y0, -x0, x1 - x0))
        } else {
            (width - 1, interpolate(y0, y1 - y0, width - 1 - x0, x1 - x0))
        };

        if outside == r0 {
            p0 = edge;
        } else {
            p1 = edge;
        }
    }
}

/// Draw a line into an RGB8 buffer, clipped to the buffer
pub fn draw_line(
    buf: &mut [u8],
    width: usize,
    height: usize,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: [u8; 3],
) {
    let Some(((mut x, mut y), (x1, y1))) = clip_segment(
        (x0 as i64, y0 as i64),
        (x1 as i64, y1 as i64),
        width as i64,
        height as i64,
    ) else {
        return;
    };

    // Bresenham
    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let step_x = if x < x1 { 1 } else { -1 };
    let step_y = if y < y1 { 1 } else { -1 };
    let mut err = dx - dy;
    loop {
        set_pixel(buf, width, x as usize, y as usize, color);
        if x == x1 && y == y1 {
            break;
        }
        let doubled = 2 * err;
        if doubled > -dy {
            err -= dy;
            x += step_x;
        }
        if doubled < dx {
            err += dx;
            y += step_y;
        }
    }
}

/// Draw a filled circle, skipping pixels outside the buffer
pub fn draw_filled_circle(
    buf: &mut [u8],
    width: usize,
    height: usize,
    cx: i32,
    cy: i32,
    radius: i32,
    color: [u8; 3],
) {
    let (cx, cy, radius) = (cx as i64, cy as i64, radius as i64);
    let x_range = (cx - radius).max(0)..=(cx + radius).min(width as i64 - 1);
    let y_range = (cy - radius).max(0)..=(cy + radius).min(height as i64 - 1);
    for y in y_range {
        for x in x_range.clone() {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= radius * radius {
                set_pixel(buf, width, x as usize, y as usize, color);
            }
        }
    }
}

/// Draw the hand skeleton onto an RGB8 frame. Landmarks are normalized to the frame.
pub fn draw_hand(frame: &mut Image, hand: &HandObservation) {
    let (width, height) = (frame.width(), frame.height());
    if frame.data.len() < width * height * 3 {
        return;
    }
    // float to int casts saturate, so far-off landmarks land on i32::MIN/MAX
    let pixels: Vec<(i32, i32)> = hand
        .landmarks()
        .iter()
        .map(|point| {
            (
                (point.x * width as f32) as i32,
                (point.y * height as f32) as i32,
            )
        })
        .collect();

    for (a, b) in HAND_CONNECTIONS {
        let (x0, y0) = pixels[usize::from(a)];
        let (x1, y1) = pixels[usize::from(b)];
        draw_line(&mut frame.data, width, height, x0, y0, x1, y1, BONE_COLOR);
    }
    for &(x, y) in &pixels {
        draw_filled_circle(&mut frame.data, width, height, x, y, JOINT_RADIUS, JOINT_COLOR);
    }
}

fn set_pixel(buf: &mut [u8], width: usize, x: usize, y: usize, color: [u8; 3]) {
    let idx = (y * width + x) * 3;
    buf[idx..idx + 3].copy_from_slice(&color);
}
