use crate::*;

fn pack_u32(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Pack an RGB8 image into `0xFFRRGGBB` words, the layout minifb expects.
pub fn rgb_to_u32(image: &Image) -> Result<Vec<u32>, ImageError> {
    image.format.ensure_format(PixelFormat::Rgb8)?;
    Ok(image
        .data
        .chunks_exact(3)
        .map(|chunk| pack_u32(chunk[0], chunk[1], chunk[2]))
        .collect())
}
