//! Error types for the settings crate.
//!
//! Covers the configuration file only. Saved-location storage reports
//! through [`floorpick_core::PersistenceError`], which the selection engine
//! treats as non-fatal.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, writing or validating the configuration.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Cannot read config file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Cannot write config file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// A value parsed fine but is not acceptable.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Cannot encode TOML config: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Structural configuration problems.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Extension other than `.json` or `.toml`.
    #[error("Config files must be .json or .toml, got '{0}'")]
    UnsupportedFormat(String),

    #[error("'{key}' must be at most {max}, got {value}")]
    ValueOutOfRange { key: String, value: u64, max: u64 },

    /// The platform exposes no per-user config directory.
    #[error("No config directory on this platform")]
    NoConfigDirectory,
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Result type alias for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
