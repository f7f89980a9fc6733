use {crate::*, base::Vec2};

pub fn yuyv_to_rgb(size: Vec2<usize>, data: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(size.area() * 3);

    for chunk in data.chunks_exact(4) {
        let (r0, g0, b0) = yuv_to_rgb(chunk[0], chunk[1], chunk[3]);
        let (r1, g1, b1) = yuv_to_rgb(chunk[2], chunk[1], chunk[3]);
        rgb.extend_from_slice(&[r0, g0, b0, r1, g1, b1]);
    }

    rgb
}

pub fn jpeg_to_rgb(image: &Image) -> Result<Image, ImageError> {
    image.format.ensure_format(PixelFormat::Jpeg)?;
    decode_image(&image.data)
}

/// Convert any supported frame to packed RGB8.
pub fn to_rgb(image: &Image) -> Result<Image, ImageError> {
    match image.format {
        PixelFormat::Rgb8 => Ok(image.clone()),
        PixelFormat::Yuyv => {
            let expected = image.size.area() * 2;
            if image.data.len() < expected {
                return Err(ImageError::Format(format!(
                    "YUYV frame too short: expected {} bytes, got {}",
                    expected,
                    image.data.len()
                )));
            }
            Ok(Image::new(
                image.size,
                yuyv_to_rgb(image.size, &image.data),
                PixelFormat::Rgb8,
            ))
        }
        PixelFormat::Jpeg => jpeg_to_rgb(image),
    }
}
