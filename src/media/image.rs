// SPDX-License-Identifier: MPL-2.0
//! Decoding of downloaded screenshots into renderable handles.

use crate::error::{Error, Result};
use iced::widget::image;

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

/// Decodes encoded image bytes (PNG, JPEG, WebP, GIF).
///
/// Decoding happens eagerly so a corrupt or unsupported payload is reported
/// as an error here instead of silently rendering nothing. Animated formats
/// keep their first frame. AVIF payloads are rejected with
/// [`Error::Image`]: an AVIF original is only shown through its WebP
/// variant.
pub fn decode_image(bytes: &[u8]) -> Result<ImageData> {
    if bytes.is_empty() {
        return Err(Error::Image("empty image payload".into()));
    }

    let decoded = image_rs::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(ImageData::from_rgba(width, height, rgba.into_raw()))
}
