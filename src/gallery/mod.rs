// SPDX-License-Identifier: MPL-2.0
//! Resolution of directory listings into render-ready display items.

pub mod item;
pub mod optimized;
pub mod resolver;

pub use item::DisplayItem;
pub use optimized::OptimizedAssetIndex;
pub use resolver::{build_items, optimized_name};

/// Root directory of every published screenshot.
pub const ASSET_ROOT: &str = "AppImages";

/// Directory holding the optimized variants, relative to [`ASSET_ROOT`].
pub const WEB_DIR: &str = "web";

/// Logical listing path of the optimized variants.
#[must_use]
pub fn web_listing_path() -> String {
    format!("{ASSET_ROOT}/{WEB_DIR}")
}

/// Logical listing path of a platform's originals.
#[must_use]
pub fn platform_listing_path(folder_name: &str) -> String {
    format!("{ASSET_ROOT}/{folder_name}")
}
