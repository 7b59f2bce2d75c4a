//! Saved-location storage contract
//!
//! The selection engine persists exactly one record: the confirmed
//! [`SavedLocation`]. Storage is an external collaborator reached through
//! [`LocationStore`]; a failing store never blocks a state transition.

use crate::data::SavedLocation;
use crate::error::{PersistenceError, PersistenceResult};

/// Single-slot key-value storage for the confirmed location.
///
/// Implementations must round-trip exactly: `load()` after `save(s)` yields `s`.
/// Saving replaces any previous record.
pub trait LocationStore {
    /// Persist `location`, replacing any previous record.
    fn save(&mut self, location: &SavedLocation) -> PersistenceResult<()>;

    /// Read the persisted record, if any.
    fn load(&self) -> PersistenceResult<Option<SavedLocation>>;

    /// Erase the persisted record. Clearing an empty store succeeds.
    fn clear(&mut self) -> PersistenceResult<()>;
}

/// In-memory store holding the serialized record.
///
/// Records go through the same JSON form a durable store would write, so it is
/// a faithful stand-in in tests and for sessions that run without storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    record: Option<String>,
    unavailable: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with a raw record (which may be invalid).
    pub fn with_raw(record: impl Into<String>) -> Self {
        Self {
            record: Some(record.into()),
            unavailable: false,
        }
    }

    /// Makes every subsequent operation fail with [`PersistenceError::Unavailable`].
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// The raw serialized record currently held.
    pub fn raw(&self) -> Option<&str> {
        self.record.as_deref()
    }

    fn check_available(&self) -> PersistenceResult<()> {
        if self.unavailable {
            return Err(PersistenceError::Unavailable(
                "in-memory store disabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl LocationStore for MemoryStore {
    fn save(&mut self, location: &SavedLocation) -> PersistenceResult<()> {
        self.check_available()?;
        self.record = Some(location.to_json()?);
        Ok(())
    }

    fn load(&self) -> PersistenceResult<Option<SavedLocation>> {
        self.check_available()?;
        self.record
            .as_deref()
            .map(SavedLocation::from_json)
            .transpose()
    }

    fn clear(&mut self) -> PersistenceResult<()> {
        self.check_available()?;
        self.record = None;
        Ok(())
    }
}
