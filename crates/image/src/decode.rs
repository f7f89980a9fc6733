use {
    crate::*,
    base::Vec2,
    std::{fs, path::Path},
};

/// Decode an encoded image (JPEG, PNG, BMP, ...) into RGB8.
///
/// Alpha is dropped and higher bit depths are reduced to 8 bits per channel.
pub fn decode_image(data: &[u8]) -> Result<Image, ImageError> {
    let decoded = crates_image::load_from_memory(data)?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(Image::new(
        Vec2::new(width as usize, height as usize),
        rgb.into_raw(),
        PixelFormat::Rgb8,
    ))
}

/// Read and decode an image file into RGB8.
pub fn load_image(path: impl AsRef<Path>) -> Result<Image, ImageError> {
    let data = fs::read(path.as_ref())?;
    decode_image(&data)
}
