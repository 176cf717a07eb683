// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the "state down, messages up" pattern: each owns its
//! state, handles its own `Message` and reports side effects back to the
//! application as an `Effect`.
//!
//! - [`carousel`] - Swipeable per-platform preview
//! - [`grid`] - Static per-platform gallery
//! - [`image_slot`] - Screenshot slot with optimized/original fallback
//! - [`selector`] - Platform selector buttons
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod carousel;
pub mod design_tokens;
pub mod grid;
pub mod image_slot;
pub mod selector;
pub mod styles;
pub mod theming;
