//! Floorpick Settings Crate
//!
//! Handles application configuration and the file-backed saved-location store.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{
    Config, LayoutKind, LayoutSettings, StorageSettings, UiSettings, DEFAULT_DATE_FORMAT,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use persistence::JsonFileStore;
