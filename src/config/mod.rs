// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[viewer]` - Zoom step and zoom input settling window
//! - `[document]` - Location of the PDFium shared library
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_PAGER_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_pager::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("zoom step: {}%", config.viewer.zoom_step_percent());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key emitted when an existing config file cannot be used.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Zoom step for the zoom buttons, in percentage points.
    #[serde(
        default = "default_zoom_step_percent",
        skip_serializing_if = "Option::is_none"
    )]
    pub zoom_step_percent: Option<f32>,

    /// How long the zoom field must stay unchanged before it is applied.
    #[serde(
        default = "default_zoom_debounce_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub zoom_debounce_ms: Option<u64>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_step_percent: default_zoom_step_percent(),
            zoom_debounce_ms: default_zoom_debounce_ms(),
        }
    }
}

impl ViewerConfig {
    /// Zoom step in percentage points, clamped to the supported range.
    #[must_use]
    pub fn zoom_step_percent(&self) -> f32 {
        self.zoom_step_percent
            .unwrap_or(DEFAULT_ZOOM_STEP_PERCENT)
            .clamp(MIN_ZOOM_STEP_PERCENT, MAX_ZOOM_STEP_PERCENT)
    }

    /// Settling window of the zoom field, clamped to the supported range.
    #[must_use]
    pub fn zoom_debounce(&self) -> Duration {
        let millis = self
            .zoom_debounce_ms
            .unwrap_or(DEFAULT_ZOOM_DEBOUNCE_MS)
            .clamp(MIN_ZOOM_DEBOUNCE_MS, MAX_ZOOM_DEBOUNCE_MS);
        Duration::from_millis(millis)
    }
}

/// Document backend settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DocumentConfig {
    /// Directory containing the PDFium shared library.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdfium_library_dir: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Viewer settings.
    #[serde(default)]
    pub viewer: ViewerConfig,

    /// Document backend settings.
    #[serde(default)]
    pub document: DocumentConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_zoom_step_percent() -> Option<f32> {
    Some(DEFAULT_ZOOM_STEP_PERCENT)
}

fn default_zoom_debounce_ms() -> Option<u64> {
    Some(DEFAULT_ZOOM_DEBOUNCE_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
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
                    log::warn!("ignoring config file {}: {err}", path.display());
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content).map_err(Error::from)
}
