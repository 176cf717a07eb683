// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configuration settings.

// ==========================================================================
// Source Defaults
// ==========================================================================

/// Root of the GitHub REST API.
pub const DEFAULT_API_BASE_URL: &str = crate::listing::github::DEFAULT_API_BASE;

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default number of tiles per grid row.
pub const DEFAULT_GRID_COLUMNS: u16 = 3;

/// Minimum number of tiles per grid row.
pub const MIN_GRID_COLUMNS: u16 = 1;

/// Maximum number of tiles per grid row.
pub const MAX_GRID_COLUMNS: u16 = 6;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Default duration of the smooth scroll between slides (milliseconds).
/// `0` jumps instantly.
pub const DEFAULT_SCROLL_ANIMATION_MS: u64 = 250;

/// Minimum scroll animation duration (milliseconds).
pub const MIN_SCROLL_ANIMATION_MS: u64 = 0;

/// Maximum scroll animation duration (milliseconds).
pub const MAX_SCROLL_ANIMATION_MS: u64 = 2000;
