//! Startup configuration.
//!
//! Read once from a JSON file; every field has a default so a partial file
//! (or no file at all) still yields a usable configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current configuration file format version.
pub const CONFIG_VERSION: u32 = 1;

pub const CONFIG_FILE_NAME: &str = "pothole_inspect.json";

/// Overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "POTHOLE_INSPECT_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub log_level: LogLevel,
    /// Initial window size in points, `[width, height]`.
    pub window_size: [f32; 2],
    /// Largest size the drawing canvas shows an image at.
    pub canvas_max_width: u32,
    pub canvas_max_height: u32,
    /// Width of the overlay preview in the side panel.
    pub overlay_preview_width: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            window_size: [1400.0, 820.0],
            canvas_max_width: 900,
            canvas_max_height: 650,
            overlay_preview_width: 360.0,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }
        Ok(config)
    }

    /// Loads the config at `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Like [`AppConfig::load_from`], but falls back to the defaults and hands
    /// the error back. Runs before the logger exists, so the caller logs it.
    pub fn load_or_default(path: &Path) -> (Self, Option<ConfigError>) {
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
