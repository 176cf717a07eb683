// SPDX-License-Identifier: MPL-2.0
//! Filename classification for remote screenshot listings.
//!
//! Both functions are total: every string input produces an answer and no
//! input is treated as an error.

use super::extensions::IMAGE_EXTENSIONS;

/// Returns `true` when `name` looks like a displayable raster image.
///
/// Hidden files (leading `.`) and names without an extension are rejected.
/// The extension comparison ignores case.
#[must_use]
pub fn is_displayable_image(name: &str) -> bool {
    if name.is_empty() || name.starts_with('.') {
        return false;
    }

    let Some((_, extension)) = name.rsplit_once('.') else {
        return false;
    };

    let extension = extension.to_lowercase();
    IMAGE_EXTENSIONS.contains(&extension.as_str())
}

/// Strips the final `.extension` from `name`.
///
/// Names without an extension are returned unchanged.
#[must_use]
pub fn derive_base_name(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((base, extension)) if !extension.is_empty() => base,
        _ => name,
    }
}
