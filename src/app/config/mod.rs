// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[camera]` - Capture device, backend and requested format
//! - `[emotion]` - Optional fixed seed for the emotion stub
//! - `[diagnostics]` - Diagnostic buffer size
//!
//! Every field is optional; missing values fall back to defaults, so an
//! empty file is a valid configuration.
//!
//! # Examples
//!
//! ```no_run
//! use emotion_lens::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::camera::VideoConstraints;
use crate::domain::diagnostics::BufferCapacity;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when the settings file is unreadable.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Camera capture preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CameraConfig {
    /// Device locator understood by the capture backend
    /// (`/dev/video0`, `0`, `video=My Webcam`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,

    /// Capture backend (`v4l2`, `avfoundation`, `dshow`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framerate: Option<u32>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: None,
            input_format: None,
            width: Some(DEFAULT_CAMERA_WIDTH),
            height: Some(DEFAULT_CAMERA_HEIGHT),
            framerate: Some(DEFAULT_CAMERA_FRAMERATE),
        }
    }
}

impl CameraConfig {
    /// Converts the section into acquisition constraints.
    ///
    /// Zero sizes mean "let the device decide"; oversized values are clamped.
    #[must_use]
    pub fn constraints(&self) -> VideoConstraints {
        let dimension = |value: Option<u32>| {
            value
                .filter(|&v| v > 0)
                .map(|v| v.min(MAX_CAMERA_DIMENSION))
        };
        VideoConstraints {
            device: self.device.clone().filter(|d| !d.trim().is_empty()),
            input_format: self.input_format.clone().filter(|f| !f.trim().is_empty()),
            width: dimension(self.width),
            height: dimension(self.height),
            framerate: self
                .framerate
                .filter(|&fps| fps > 0)
                .map(|fps| fps.min(MAX_CAMERA_FRAMERATE)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct EmotionConfig {
    /// Fixed seed for reproducible label sequences. Random when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY,
        }
    }
}

impl DiagnosticsConfig {
    /// Buffer capacity clamped to the supported range.
    #[must_use]
    pub fn capacity(&self) -> BufferCapacity {
        BufferCapacity::new(self.buffer_capacity)
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub camera: CameraConfig,

    #[serde(default)]
    pub emotion: EmotionConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

fn default_buffer_capacity() -> usize {
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
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
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns the config plus the i18n key of a warning to show when the file
/// existed but could not be used. A missing file is not a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from `base_dir` (or the default location).
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable settings");
            (Config::default(), Some(LOAD_ERROR_KEY.to_string()))
        }
    }
}

/// Reads and parses a settings file.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and
/// [`Error::Config`] when it is not valid TOML for this schema.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration under `base_dir` (or the default location).
///
/// # Errors
///
/// Propagates I/O and serialization failures.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no configuration directory".to_string())),
    }
}

/// Writes a settings file, creating parent directories as needed.
///
/// # Errors
///
/// Propagates I/O and serialization failures.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
