// SPDX-License-Identifier: MPL-2.0
//! Image loading, decoding, and resizing to the display resolution.

use crate::config::defaults::{TARGET_HEIGHT, TARGET_WIDTH};
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::imageops::FilterType;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;

/// A decoded RGBA bitmap together with the widget handle used to render it.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Load an image from the given path and return its data at original size.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Decode`] if
/// its contents are not a decodable image.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let img = decode(path.as_ref())?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Load an image and resize it to the fixed display resolution.
///
/// Every displayed image goes through this path, so the result always has
/// exactly [`TARGET_WIDTH`] x [`TARGET_HEIGHT`] pixels. Lanczos3 keeps the
/// downscaled result sharp at the cost of a slower resample.
///
/// # Errors
///
/// Same failure modes as [`load_image`].
pub fn load_for_display<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let img = decode(path.as_ref())?;
    let resized = img.resize_exact(TARGET_WIDTH, TARGET_HEIGHT, FilterType::Lanczos3);

    let (width, height) = resized.dimensions();
    let pixels = resized.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

fn decode(path: &Path) -> Result<image_rs::DynamicImage> {
    let bytes = fs::read(path).map_err(|e| Error::Io(e.to_string()))?;
    image_rs::load_from_memory(&bytes).map_err(|e| Error::Decode(e.to_string()))
}
