// SPDX-License-Identifier: MPL-2.0
//! `appshots` is a desktop viewer for the tvOS, macOS and iOS screenshot
//! collections a GitHub repository publishes under `AppImages/`.
//!
//! Directory listings come from the GitHub contents API. Each file becomes a
//! display item that prefers a pre-generated WebP variant and falls back to
//! the original. Every platform is shown both as a swipeable carousel and as
//! a static grid.

pub mod app;
pub mod error;
pub mod gallery;
pub mod http;
pub mod i18n;
pub mod listing;
pub mod logging;
pub mod media;
pub mod platform;
pub mod ui;
