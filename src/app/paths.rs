// SPDX-License-Identifier: MPL-2.0
//! Where the settings file lives.
//!
//! # Resolution Order
//!
//! 1. Explicit override passed to [`config_dir_with_override`] (tests)
//! 2. `--config-dir` CLI argument, registered with [`init_cli_override`]
//! 3. `EMOTION_LENS_CONFIG_DIR` environment variable (if non-empty)
//! 4. Platform config directory via `dirs`:
//!    - Linux: `~/.config/EmotionLens/`
//!    - macOS: `~/Library/Application Support/EmotionLens/`
//!    - Windows: `C:\Users\<User>\AppData\Roaming\EmotionLens\`

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "EmotionLens";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "EMOTION_LENS_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the `--config-dir` argument. Only the first call has effect;
/// returns `false` for later ones.
pub fn init_cli_override(config_dir: Option<String>) -> bool {
    CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok()
}

/// Returns the config directory, or `None` if the platform has none.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

#[must_use]
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = CLI_CONFIG_DIR.get().cloned().flatten() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
