//! Configuration management for floorpick
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Layout (which built-in floor plan to pick from)
//! - Storage (where the confirmed location is kept)
//! - UI text and formatting (rejection message, dates, coordinates)

use chrono::format::{Item, StrftimeItems};
use floorpick_core::DEFAULT_REJECTION_MESSAGE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Directory name under the platform config dir.
pub const APP_DIR_NAME: &str = "floorpick";

/// File name of the configuration file inside [`APP_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// File name of the saved-location record inside [`APP_DIR_NAME`].
pub const STORAGE_FILE_NAME: &str = "pool_table_selection.json";

/// Confirmation timestamp format, e.g. `14/11/2023 22:13`.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Largest accepted value for [`UiSettings::coordinate_decimals`].
pub const MAX_COORDINATE_DECIMALS: u8 = 6;

/// Built-in floor plan selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Aerial photo with two lawn strips, zones only
    PoolImage,
    /// Vector plan with four sectors and numbered tables
    #[default]
    PoolVector,
}

impl std::fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PoolImage => write!(f, "pool_image"),
            Self::PoolVector => write!(f, "pool_vector"),
        }
    }
}

/// Layout settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Floor plan shown to the user
    #[serde(default)]
    pub plan: LayoutKind,
}

/// Saved-location storage settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Explicit record path; the platform default is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// UI text and formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Shown when a pointer event hits nothing selectable
    pub rejection_message: String,
    /// strftime pattern for the confirmation timestamp
    pub date_format: String,
    /// Decimal places of the coordinates in the status view
    pub coordinate_decimals: u8,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            rejection_message: DEFAULT_REJECTION_MESSAGE.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            coordinate_decimals: 0,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Floor plan selection
    #[serde(default)]
    pub layout: LayoutSettings,
    /// Saved-location storage
    #[serde(default)]
    pub storage: StorageSettings,
    /// UI preferences
    #[serde(default)]
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )
            .into()),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config_dir>/floorpick/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        Ok(app_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML, by extension)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to file (JSON or TOML, by extension)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = Format::from_path(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.ui.rejection_message.trim().is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "ui.rejection_message".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.ui.date_format.trim().is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "ui.date_format".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if StrftimeItems::new(&self.ui.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(SettingsError::InvalidSetting {
                key: "ui.date_format".to_string(),
                reason: format!("'{}' is not a valid strftime pattern", self.ui.date_format),
            });
        }

        if self.ui.coordinate_decimals > MAX_COORDINATE_DECIMALS {
            return Err(ConfigError::ValueOutOfRange {
                key: "ui.coordinate_decimals".to_string(),
                value: u64::from(self.ui.coordinate_decimals),
                max: u64::from(MAX_COORDINATE_DECIMALS),
            }
            .into());
        }

        if let Some(path) = &self.storage.path {
            if path.as_os_str().is_empty() || path.is_dir() {
                return Err(SettingsError::InvalidSetting {
                    key: "storage.path".to_string(),
                    reason: format!("'{}' is not a file path", path.display()),
                });
            }
        }

        Ok(())
    }

    /// Where the confirmed location is stored.
    pub fn storage_path(&self) -> SettingsResult<PathBuf> {
        match &self.storage.path {
            Some(path) => Ok(path.clone()),
            None => Ok(app_dir()?.join(STORAGE_FILE_NAME)),
        }
    }
}

fn app_dir() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| ConfigError::NoConfigDirectory.into())
}
