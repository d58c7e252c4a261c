//! Project placard images.
//!
//! Every image is decoded once and resampled to the same RGBA8 raster so the
//! renderer can keep all of them in one texture array, one layer per placard.

use crate::constants::PLACARD_IMAGE_SIZE;
use crate::error::AssetError;
use image::imageops::FilterType;

pub const PLACARD_IMAGE_BYTES: usize =
    (PLACARD_IMAGE_SIZE[0] * PLACARD_IMAGE_SIZE[1] * 4) as usize;

/// Decoded pixels for one placard's texture layer.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacardImage {
    pub index: usize,
    pub rgba: Vec<u8>,
}

/// Decode an encoded image (PNG or JPEG) into a placard-sized RGBA8 raster.
pub fn decode_placard_image(index: usize, bytes: &[u8]) -> Result<PlacardImage, AssetError> {
    if bytes.is_empty() {
        return Err(AssetError::Empty);
    }
    let img = image::load_from_memory(bytes)?;
    let [w, h] = PLACARD_IMAGE_SIZE;
    let rgba = if img.width() == w && img.height() == h {
        img.to_rgba8()
    } else {
        img.resize_exact(w, h, FilterType::Triangle).to_rgba8()
    };
    Ok(PlacardImage {
        index,
        rgba: rgba.into_raw(),
    })
}
