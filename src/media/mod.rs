// SPDX-License-Identifier: MPL-2.0
//! Screenshot media handling: filename rules, ordering, download and decode.

pub mod classify;
pub mod fetch;
pub mod image;
pub mod sort;

pub use classify::{derive_base_name, is_displayable_image};
pub use extensions::IMAGE_EXTENSIONS;
pub use fetch::AssetClient;
pub use image::{decode_image, ImageData};
pub use sort::{compare_natural, sort_natural};

/// Supported media extensions
pub mod extensions {
    /// Raster image extensions a screenshot may use (compared lowercase).
    pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "avif"];

    /// Extension of the pre-generated optimized variants.
    pub const OPTIMIZED_EXTENSION: &str = "webp";
}
