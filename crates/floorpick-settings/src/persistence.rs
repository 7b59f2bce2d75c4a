//! Saved-location persistence
//!
//! File-backed [`LocationStore`]: one flat JSON record at a fixed path.
//! A missing file means "nothing saved".

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use floorpick_core::{LocationStore, PersistenceResult, SavedLocation};

use crate::config::Config;
use crate::error::SettingsResult;

/// Stores the confirmed location as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `path`. Nothing is touched until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the path configured in `config` (or the platform default).
    pub fn from_config(config: &Config) -> SettingsResult<Self> {
        Ok(Self::new(config.storage_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl LocationStore for JsonFileStore {
    fn save(&mut self, location: &SavedLocation) -> PersistenceResult<()> {
        let json = location.to_json()?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Write then rename so a crash never leaves a half-written record
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            if let Err(cleanup) = fs::remove_file(&temp) {
                tracing::warn!("Cannot remove {}: {}", temp.display(), cleanup);
            }
            return Err(e.into());
        }

        tracing::debug!("Saved location written to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> PersistenceResult<Option<SavedLocation>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        SavedLocation::from_json(&content).map(Some)
    }

    fn clear(&mut self) -> PersistenceResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!("Saved location removed from {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
