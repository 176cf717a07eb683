// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[source]` - Where the screenshot collections are published
//! - `[display]` - Grid layout and carousel animation
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` or set `APPSHOTS_CONFIG_DIR`
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use appshots::app::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! println!("{} grid columns", config.display.grid_columns());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Where the screenshots are published.
///
/// `owner` and `repo` are only used together. When either is missing the
/// identity is derived from `page_url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    /// Address of the published page, e.g. `https://octocat.github.io/shots/?preview=ios`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,

    /// Root of the contents API.
    #[serde(
        default = "default_api_base_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_base_url: Option<String>,

    /// Base URL relative asset paths are resolved against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            owner: None,
            repo: None,
            page_url: None,
            api_base_url: default_api_base_url(),
            asset_base_url: None,
            user_agent: None,
        }
    }
}

/// Grid and carousel presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Tiles per grid row.
    #[serde(
        default = "default_grid_columns",
        skip_serializing_if = "Option::is_none"
    )]
    pub grid_columns: Option<u16>,

    /// Duration of the smooth scroll between carousel slides.
    #[serde(
        default = "default_scroll_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_animation_ms: Option<u64>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            grid_columns: default_grid_columns(),
            scroll_animation_ms: default_scroll_animation_ms(),
        }
    }
}

impl DisplayConfig {
    /// Grid columns, kept inside the supported range.
    #[must_use]
    pub fn grid_columns(&self) -> u16 {
        self.grid_columns
            .unwrap_or(DEFAULT_GRID_COLUMNS)
            .clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS)
    }

    /// Scroll animation duration, kept inside the supported range.
    #[must_use]
    pub fn scroll_animation_ms(&self) -> u64 {
        self.scroll_animation_ms
            .unwrap_or(DEFAULT_SCROLL_ANIMATION_MS)
            .clamp(MIN_SCROLL_ANIMATION_MS, MAX_SCROLL_ANIMATION_MS)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_api_base_url() -> Option<String> {
    Some(DEFAULT_API_BASE_URL.to_string())
}

fn default_grid_columns() -> Option<u16> {
    Some(DEFAULT_GRID_COLUMNS)
}

fn default_scroll_animation_ms() -> Option<u64> {
    Some(DEFAULT_SCROLL_ANIMATION_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn write_settings(config: &Config, path: &Path) {
        fs::create_dir_all(path.parent().expect("settings path has a parent"))
            .expect("failed to create config dir");
        let content = toml::to_string_pretty(config).expect("config should serialize");
        fs::write(path, content).expect("failed to write config");
    }

    #[test]
    fn written_settings_load_back_unchanged() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            source: SourceConfig {
                owner: Some("octocat".to_string()),
                repo: Some("shots".to_string()),
                asset_base_url: Some("https://cdn.example.com/".to_string()),
                ..SourceConfig::default()
            },
            display: DisplayConfig {
                grid_columns: Some(4),
                scroll_animation_ms: Some(0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        write_settings(&config, &config_path);
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "this is not toml = [").expect("failed to write file");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[source]\nowner = \"octocat\"\n").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert_eq!(loaded.source.owner.as_deref(), Some("octocat"));
        assert_eq!(loaded.source.api_base_url.as_deref(), Some(DEFAULT_API_BASE_URL));
        assert_eq!(loaded.display.grid_columns(), DEFAULT_GRID_COLUMNS);
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("valid config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn out_of_range_display_values_are_clamped() {
        let display = DisplayConfig {
            grid_columns: Some(40),
            scroll_animation_ms: Some(60_000),
        };
        assert_eq!(display.grid_columns(), MAX_GRID_COLUMNS);
        assert_eq!(display.scroll_animation_ms(), MAX_SCROLL_ANIMATION_MS);

        let display = DisplayConfig {
            grid_columns: Some(0),
            scroll_animation_ms: None,
        };
        assert_eq!(display.grid_columns(), MIN_GRID_COLUMNS);
        assert_eq!(display.scroll_animation_ms(), DEFAULT_SCROLL_ANIMATION_MS);
    }

    #[test]
    fn broken_file_falls_back_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[display\n").expect("failed to write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn absent_file_loads_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
