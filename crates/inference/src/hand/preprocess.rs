use {
    super::INPUT_SIZE,
    crate::InferError,
    base::{Tensor, Vec2},
    image::{Image, PixelFormat, crop},
};

/// Part of a frame handed to the model, in frame pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub origin: Vec2<usize>,
    pub size: Vec2<usize>,
}

/// Letterbox transformation parameters for coordinate rescaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterboxInfo {
    /// Scale factor applied to the region (min(224/H, 224/W))
    pub scale: f32,
    /// Horizontal padding added (in pixels)
    pub pad_x: f32,
    /// Vertical padding added (in pixels)
    pub pad_y: f32,
}

/// Split a frame into two overlapping full-height regions, left 60% and right 60%.
///
/// A hand near the middle of the frame lands in both; the duplicates are
/// removed after detection.
pub fn split_regions(frame_size: Vec2<usize>) -> [Region; 2] {
    let width = (frame_size.x * 3 / 5).max(1).min(frame_size.x);
    [
        Region {
            origin: Vec2::new(0, 0),
            size: Vec2::new(width, frame_size.y),
        },
        Region {
            origin: Vec2::new(frame_size.x - width, 0),
            size: Vec2::new(width, frame_size.y),
        },
    ]
}

/// Cut `region` out of an RGB8 frame and letterbox it into the model input.
///
/// Returns a `[1, 3, 224, 224]` tensor with values in [0.0, 1.0], padding left
/// at zero, and the parameters needed to map model coordinates back.
pub fn preprocess(image: &Image, region: Region) -> Result<(Tensor<f32>, LetterboxInfo), InferError> {
    image.format.ensure_format(PixelFormat::Rgb8)?;
    if image.data.len() < image.size.area() * 3 {
        return Err(InferError::ShapeMismatch {
            expected: format!("{} bytes", image.size.area() * 3),
            got: format!("{} bytes", image.data.len()),
        });
    }
    let cropped = crop(image, region.origin, region.size)?;
    let (w, h) = (cropped.width(), cropped.height());
    if w == 0 || h == 0 {
        return Err(InferError::ShapeMismatch {
            expected: "non-empty region".to_string(),
            got: format!("{:?}", region),
        });
    }

    let scale = (INPUT_SIZE as f32 / w as f32).min(INPUT_SIZE as f32 / h as f32);
    let new_w = ((w as f32 * scale) as usize).clamp(1, INPUT_SIZE);
    let new_h = ((h as f32 * scale) as usize).clamp(1, INPUT_SIZE);
    let pad_x = (INPUT_SIZE - new_w) / 2;
    let pad_y = (INPUT_SIZE - new_h) / 2;

    // nearest-neighbor resize straight into the padded NCHW buffer
    let plane = INPUT_SIZE * INPUT_SIZE;
    let mut nchw = vec![0.0f32; 3 * plane];
    for out_y in 0..new_h {
        let src_y = ((out_y as f32 / scale) as usize).min(h - 1);
        for out_x in 0..new_w {
            let src_x = ((out_x as f32 / scale) as usize).min(w - 1);
            let pixel = cropped.rgb_at(src_x, src_y);
            let dst = (out_y + pad_y) * INPUT_SIZE + out_x + pad_x;
            for (ch, value) in pixel.iter().enumerate() {
                nchw[ch * plane + dst] = *value as f32 / 255.0;
            }
        }
    }

    let tensor = Tensor::new(vec![1, 3, INPUT_SIZE, INPUT_SIZE], nchw).map_err(|e| {
        InferError::ShapeMismatch {
            expected: format!("[1, 3, {INPUT_SIZE}, {INPUT_SIZE}]"),
            got: e.to_string(),
        }
    })?;
    Ok((
        tensor,
        LetterboxInfo {
            scale,
            pad_x: pad_x as f32,
            pad_y: pad_y as f32,
        },
    ))
}
