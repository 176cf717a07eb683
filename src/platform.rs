// SPDX-License-Identifier: MPL-2.0
//! The fixed set of platforms screenshots are published for.

use std::fmt;

/// A screenshot platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    Tvos,
    Macos,
    Ios,
}

/// Static description of where a platform's screenshots live and how the
/// platform is named on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformDescriptor {
    pub key: Platform,
    /// Directory under `AppImages/` holding the original screenshots.
    pub folder_name: &'static str,
    pub label: &'static str,
}

/// All platforms, in display order. The first entry is the default selection.
pub const PLATFORMS: [PlatformDescriptor; 3] = [
    PlatformDescriptor {
        key: Platform::Tvos,
        folder_name: "tvOS",
        label: "tvOS",
    },
    PlatformDescriptor {
        key: Platform::Macos,
        folder_name: "macOS",
        label: "macOS",
    },
    PlatformDescriptor {
        key: Platform::Ios,
        folder_name: "iOS",
        label: "iOS",
    },
];

impl Platform {
    /// Every platform in display order.
    pub const ALL: [Platform; 3] = [Platform::Tvos, Platform::Macos, Platform::Ios];

    /// Lowercase key used in query parameters and CLI flags.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Platform::Tvos => "tvos",
            Platform::Macos => "macos",
            Platform::Ios => "ios",
        }
    }

    #[must_use]
    pub fn descriptor(self) -> &'static PlatformDescriptor {
        match self {
            Platform::Tvos => &PLATFORMS[0],
            Platform::Macos => &PLATFORMS[1],
            Platform::Ios => &PLATFORMS[2],
        }
    }

    /// Position in [`PLATFORMS`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Platform::Tvos => 0,
            Platform::Macos => 1,
            Platform::Ios => 2,
        }
    }

    /// Parses a user supplied key. Surrounding whitespace and case are ignored;
    /// anything unrecognized yields `None`.
    #[must_use]
    pub fn from_key(value: &str) -> Option<Self> {
        let cleaned = value.trim().to_lowercase();
        Platform::ALL
            .into_iter()
            .find(|platform| platform.key() == cleaned)
    }
}

impl Default for Platform {
    fn default() -> Self {
        PLATFORMS[0].key
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_match_their_keys() {
        for platform in Platform::ALL {
            assert_eq!(platform.descriptor().key, platform);
            assert_eq!(PLATFORMS[platform.index()].key, platform);
        }
    }

    #[test]
    fn from_key_normalizes_case_and_whitespace() {
        assert_eq!(Platform::from_key("  iOS "), Some(Platform::Ios));
        assert_eq!(Platform::from_key("MACOS"), Some(Platform::Macos));
        assert_eq!(Platform::from_key("tvos"), Some(Platform::Tvos));
    }

    #[test]
    fn from_key_rejects_unknown_values() {
        assert_eq!(Platform::from_key("watchos"), None);
        assert_eq!(Platform::from_key(""), None);
    }

    #[test]
    fn default_platform_is_first_descriptor() {
        assert_eq!(Platform::default(), Platform::Tvos);
    }
}
