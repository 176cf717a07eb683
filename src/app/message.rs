// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::pipeline::Collections;
use super::selection::PresentationMode;
use crate::error::Error;
use crate::media::ImageData;
use crate::platform::Platform;
use crate::ui::{carousel, grid};
use std::time::Instant;

/// Identifies the slot an image load belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTarget {
    pub mode: PresentationMode,
    pub platform: Platform,
    pub generation: u64,
    pub index: usize,
}

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded together with the platform they belong to.
#[derive(Debug, Clone)]
pub enum Message {
    Carousel(Platform, carousel::Message),
    Grid(Platform, grid::Message),
    ModeSelected(PresentationMode),
    PlatformSelected(PresentationMode, Platform),
    /// Re-run the whole listing pipeline.
    Refresh,
    CollectionsLoaded(Collections),
    ImageLoaded {
        target: SlotTarget,
        src: String,
        result: Result<ImageData, Error>,
    },
    /// Arrow key not captured by any widget.
    NavigationKey(carousel::NavKey),
    /// Frame-synchronized tick from `window::frames()`.
    Frame(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Repository owner, overrides `[source] owner`.
    pub owner: Option<String>,
    /// Repository name, overrides `[source] repo`.
    pub repo: Option<String>,
    /// Page the collection is published on, overrides `[source] page_url`.
    pub page_url: Option<String>,
    /// Initially selected preview platform.
    pub preview: Option<String>,
    /// Initially selected gallery platform.
    pub gallery: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `APPSHOTS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
