// Host-side tests for decoding project images into placard texture layers.

use image::{ImageFormat, Rgba, RgbaImage};
use room_core::constants::PLACARD_IMAGE_SIZE;
use room_core::images::PLACARD_IMAGE_BYTES;
use room_core::{decode_placard_image, AssetError};
use std::io::Cursor;

fn encode(img: &RgbaImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format).unwrap();
    out.into_inner()
}

#[test]
fn small_images_are_resampled_to_layer_size() {
    let png = encode(&RgbaImage::from_pixel(4, 2, Rgba([10, 20, 30, 255])), ImageFormat::Png);
    let decoded = decode_placard_image(3, &png).unwrap();
    assert_eq!(decoded.index, 3);
    assert_eq!(decoded.rgba.len(), PLACARD_IMAGE_BYTES);
    assert_eq!(&decoded.rgba[..4], &[10, 20, 30, 255]);
}

#[test]
fn layer_sized_images_keep_their_pixels() {
    let [w, h] = PLACARD_IMAGE_SIZE;
    let mut img = RgbaImage::from_pixel(w, h, Rgba([0, 0, 0, 255]));
    img.put_pixel(w - 1, h - 1, Rgba([255, 0, 0, 255]));
    let decoded = decode_placard_image(0, &encode(&img, ImageFormat::Png)).unwrap();
    assert_eq!(decoded.rgba, img.into_raw());
}

#[test]
fn empty_and_garbage_bodies_are_errors() {
    assert!(matches!(decode_placard_image(0, &[]), Err(AssetError::Empty)));
    assert!(matches!(
        decode_placard_image(0, b"<html>not found</html>"),
        Err(AssetError::Decode(_))
    ));
}
