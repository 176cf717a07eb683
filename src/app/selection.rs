// SPDX-License-Identifier: MPL-2.0
//! Active platform of each presentation mode.

use crate::platform::Platform;
use url::Url;

/// The two ways a collection is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PresentationMode {
    /// Swipeable carousel.
    #[default]
    Preview,
    /// Static grid.
    Gallery,
}

impl PresentationMode {
    pub const ALL: [PresentationMode; 2] = [PresentationMode::Preview, PresentationMode::Gallery];

    /// Query parameter that preselects this mode's platform.
    #[must_use]
    pub fn query_key(self) -> &'static str {
        match self {
            PresentationMode::Preview => "preview",
            PresentationMode::Gallery => "gallery",
        }
    }

    /// Localization key of the mode's tab label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            PresentationMode::Preview => "mode-preview",
            PresentationMode::Gallery => "mode-gallery",
        }
    }
}

/// Selected platform per presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub preview: Platform,
    pub gallery: Platform,
}

impl Selection {
    /// Initial selection from the page URL query, with CLI values taking
    /// precedence. Unrecognized values leave the default platform.
    #[must_use]
    pub fn initial(page_url: Option<&Url>, cli_preview: Option<&str>, cli_gallery: Option<&str>) -> Self {
        let pick = |mode: PresentationMode, cli: Option<&str>| {
            cli.and_then(Platform::from_key)
                .or_else(|| page_url.and_then(|url| query_platform(url, mode.query_key())))
                .unwrap_or_default()
        };

        Self {
            preview: pick(PresentationMode::Preview, cli_preview),
            gallery: pick(PresentationMode::Gallery, cli_gallery),
        }
    }

    #[must_use]
    pub fn get(&self, mode: PresentationMode) -> Platform {
        match mode {
            PresentationMode::Preview => self.preview,
            PresentationMode::Gallery => self.gallery,
        }
    }

    pub fn set(&mut self, mode: PresentationMode, platform: Platform) {
        match mode {
            PresentationMode::Preview => self.preview = platform,
            PresentationMode::Gallery => self.gallery = platform,
        }
    }
}

fn query_platform(url: &Url, key: &str) -> Option<Platform> {
    url.query_pairs()
        .find(|(name, _)| name == key)
        .and_then(|(_, value)| Platform::from_key(&value))
}
