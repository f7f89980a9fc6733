use {
    base::Vec2,
    image::{Image, PixelFormat, crop, fit_size, mirror_horizontal, resize_to_fit},
};

fn gradient(width: usize, height: usize) -> Image {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[x as u8, y as u8, 0]);
        }
    }
    Image::new(Vec2::new(width, height), data, PixelFormat::Rgb8)
}

#[test]
fn test_fit_size_landscape() {
    assert_eq!(fit_size(Vec2::new(1000, 600), 500), Vec2::new(500, 300));
}

#[test]
fn test_fit_size_portrait() {
    assert_eq!(fit_size(Vec2::new(300, 900), 500), Vec2::new(166, 500));
}

#[test]
fn test_fit_size_square_scales_up() {
    assert_eq!(fit_size(Vec2::new(400, 400), 500), Vec2::new(500, 500));
}

#[test]
fn test_resize_to_fit_keeps_aspect() {
    let resized = resize_to_fit(&gradient(40, 20), 10).unwrap();

    assert_eq!(resized.size, Vec2::new(10, 5));
    assert_eq!(resized.data.len(), 10 * 5 * 3);
    assert_eq!(resized.format, PixelFormat::Rgb8);
}

#[test]
fn test_resize_to_fit_rejects_bad_buffer() {
    let broken = Image::new(Vec2::new(10, 10), vec![0; 12], PixelFormat::Rgb8);
    assert!(resize_to_fit(&broken, 5).is_err());
}

#[test]
fn test_mirror_horizontal_reverses_rows() {
    let image = gradient(3, 2);

    let mirrored = mirror_horizontal(&image).unwrap();

    assert_eq!(mirrored.rgb_at(0, 0), [2, 0, 0]);
    assert_eq!(mirrored.rgb_at(2, 1), [0, 1, 0]);
    assert_eq!(mirror_horizontal(&mirrored).unwrap(), image);
}

#[test]
fn test_crop_copies_region() {
    let cropped = crop(&gradient(6, 4), Vec2::new(2, 1), Vec2::new(3, 2)).unwrap();

    assert_eq!(cropped.size, Vec2::new(3, 2));
    assert_eq!(cropped.rgb_at(0, 0), [2, 1, 0]);
    assert_eq!(cropped.rgb_at(2, 1), [4, 2, 0]);
}

#[test]
fn test_crop_outside_bounds() {
    assert!(crop(&gradient(4, 4), Vec2::new(3, 0), Vec2::new(2, 2)).is_err());
}
