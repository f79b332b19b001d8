//! User settings persisted as TOML.
//!
//! Settings live in the platform config directory and are optional: a missing
//! file yields defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use macfmt_normalize::DEFAULT_FLASH;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// How formatted addresses are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Bordered table with one row per format.
    #[default]
    Table,
    /// `name value` lines.
    Plain,
    /// JSON object per input.
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output: OutputSettings,
    pub clipboard: ClipboardSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub style: OutputStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardSettings {
    /// Program and arguments that receive copied text on stdin.
    pub command: Vec<String>,
    /// How long a copied entry stays marked, in milliseconds.
    pub flash_ms: u64,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            command: Vec::new(),
            flash_ms: u64::try_from(DEFAULT_FLASH.as_millis()).unwrap_or(2000),
        }
    }
}

impl ClipboardSettings {
    pub fn flash(&self) -> Duration {
        Duration::from_millis(self.flash_ms)
    }
}

impl Settings {
    /// Load settings from an explicit path, or from the default location.
    ///
    /// An explicit path must parse; the default location falls back to
    /// defaults with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error when an explicitly given file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Ok(Self::load_default_from(&Self::config_path())),
        }
    }

    /// Load settings from the default location, never failing.
    ///
    /// A missing file yields defaults; a file that cannot be read or parsed
    /// is logged and replaced by defaults.
    pub fn load_default_from(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }
        Self::load_from(path).unwrap_or_else(|error| {
            warn!(%error, "ignoring unreadable settings file");
            Self::default()
        })
    }

    /// Load settings from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save settings to a specific path, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or writing fails.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let io_error = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(io_error)
    }

    /// Render the settings as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization fails.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "macfmt", "macfmt")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}
