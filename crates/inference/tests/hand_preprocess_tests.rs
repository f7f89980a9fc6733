use {
    base::Vec2,
    image::{Image, PixelFormat},
    inference::{
        InferError,
        hand::{
            INPUT_SIZE,
            preprocess::{Region, preprocess, split_regions},
        },
    },
};

fn solid(width: usize, height: usize, rgb: [u8; 3]) -> Image {
    let data = rgb.repeat(width * height);
    Image::new(Vec2::new(width, height), data, PixelFormat::Rgb8)
}

fn full(image: &Image) -> Region {
    Region {
        origin: Vec2::new(0, 0),
        size: image.size,
    }
}

#[test]
fn test_split_regions_overlap() {
    let [left, right] = split_regions(Vec2::new(200, 100));
    assert_eq!(left.origin, Vec2::new(0, 0));
    assert_eq!(left.size, Vec2::new(120, 100));
    assert_eq!(right.origin, Vec2::new(80, 0));
    assert_eq!(right.size, Vec2::new(120, 100));
}

#[test]
fn test_preprocess_output_shape() {
    let image = solid(112, 56, [255, 0, 0]);
    let (tensor, _) = preprocess(&image, full(&image)).unwrap();
    assert_eq!(tensor.shape, vec![1, 3, INPUT_SIZE, INPUT_SIZE]);
    assert_eq!(tensor.len(), 3 * INPUT_SIZE * INPUT_SIZE);
}

#[test]
fn test_preprocess_letterbox_wide_frame() {
    let image = solid(112, 56, [255, 0, 0]);
    let (tensor, letterbox) = preprocess(&image, full(&image)).unwrap();
    assert_eq!(letterbox.scale, 2.0);
    assert_eq!(letterbox.pad_x, 0.0);
    assert_eq!(letterbox.pad_y, 56.0);

    let plane = INPUT_SIZE * INPUT_SIZE;
    // padding row
    assert_eq!(tensor.data[0], 0.0);
    // first image row, red and green planes
    assert_eq!(tensor.data[56 * INPUT_SIZE], 1.0);
    assert_eq!(tensor.data[plane + 56 * INPUT_SIZE], 0.0);
    // last image row and first padding row below it
    assert_eq!(tensor.data[167 * INPUT_SIZE + 223], 1.0);
    assert_eq!(tensor.data[168 * INPUT_SIZE], 0.0);
}

#[test]
fn test_preprocess_crops_region() {
    // left half black, right half white
    let mut image = solid(8, 4, [0, 0, 0]);
    for y in 0..4 {
        for x in 4..8 {
            let i = (y * 8 + x) * 3;
            image.data[i..i + 3].copy_from_slice(&[255, 255, 255]);
        }
    }
    let region = Region {
        origin: Vec2::new(4, 0),
        size: Vec2::new(4, 4),
    };
    let (tensor, letterbox) = preprocess(&image, region).unwrap();
    assert_eq!(letterbox.scale, 56.0);
    assert!(tensor.data.iter().all(|v| *v == 1.0));
}

#[test]
fn test_preprocess_rejects_yuyv() {
    let image = Image::new(Vec2::new(4, 2), vec![0; 16], PixelFormat::Yuyv);
    let region = full(&image);
    assert!(matches!(preprocess(&image, region), Err(InferError::Image(_))));
}

#[test]
fn test_preprocess_rejects_region_outside_frame() {
    let image = solid(10, 10, [0, 0, 0]);
    let region = Region {
        origin: Vec2::new(5, 0),
        size: Vec2::new(6, 10),
    };
    assert!(matches!(preprocess(&image, region), Err(InferError::Image(_))));
}
