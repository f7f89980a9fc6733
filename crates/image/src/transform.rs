use {crate::*, base::Vec2, crates_image::imageops::FilterType};

/// Size whose longer side is `max_size`, keeping the aspect ratio of `size`.
///
/// Smaller images are scaled up. When width and height are equal, width is
/// treated as the longer side.
pub fn fit_size(size: Vec2<usize>, max_size: usize) -> Vec2<usize> {
    if size.x == 0 || size.y == 0 {
        return size;
    }
    if size.y > size.x {
        let width = (size.x as f64 * (max_size as f64 / size.y as f64)) as usize;
        Vec2::new(width.max(1), max_size)
    } else {
        let height = (size.y as f64 * (max_size as f64 / size.x as f64)) as usize;
        Vec2::new(max_size, height.max(1))
    }
}

/// Resize an RGB8 image so its longer side is `max_size`.
pub fn resize_to_fit(image: &Image, max_size: usize) -> Result<Image, ImageError> {
    image.format.ensure_format(PixelFormat::Rgb8)?;
    let target = fit_size(image.size, max_size);
    if target == image.size {
        return Ok(image.clone());
    }
    let buffer = crates_image::RgbImage::from_raw(
        image.size.x as u32,
        image.size.y as u32,
        image.data.clone(),
    )
    .ok_or_else(|| {
        ImageError::Format(format!(
            "buffer of {} bytes does not hold a {}x{} RGB image",
            image.data.len(),
            image.size.x,
            image.size.y
        ))
    })?;
    let resized = crates_image::imageops::resize(
        &buffer,
        target.x as u32,
        target.y as u32,
        FilterType::Triangle,
    );
    Ok(Image::new(target, resized.into_raw(), PixelFormat::Rgb8))
}

/// Flip an RGB8 image left to right (selfie view).
pub fn mirror_horizontal(image: &Image) -> Result<Image, ImageError> {
    image.format.ensure_format(PixelFormat::Rgb8)?;
    if image.size.x == 0 {
        return Ok(image.clone());
    }
    let row_bytes = image.size.x * 3;
    let mut data = Vec::with_capacity(image.data.len());
    for row in image.data.chunks_exact(row_bytes) {
        for pixel in row.chunks_exact(3).rev() {
            data.extend_from_slice(pixel);
        }
    }
    Ok(Image::new(image.size, data, PixelFormat::Rgb8))
}

/// Copy the RGB8 pixels inside `[origin, origin + size)` into a new image.
pub fn crop(image: &Image, origin: Vec2<usize>, size: Vec2<usize>) -> Result<Image, ImageError> {
    image.format.ensure_format(PixelFormat::Rgb8)?;
    if origin.x + size.x > image.size.x || origin.y + size.y > image.size.y {
        return Err(ImageError::Format(format!(
            "crop {:?}+{:?} outside {:?}",
            origin, size, image.size
        )));
    }
    let mut data = Vec::with_capacity(size.area() * 3);
    for y in origin.y..origin.y + size.y {
        let start = (y * image.size.x + origin.x) * 3;
        data.extend_from_slice(&image.data[start..start + size.x * 3]);
    }
    Ok(Image::new(size, data, PixelFormat::Rgb8))
}
