//! Data models for selections and saved locations
//!
//! This module provides:
//! - The in-session [`Selection`] produced by a successful hit test
//! - The confirmed, persisted [`SavedLocation`] record
//!
//! Both carry model-space coordinates only. The serialized form of a
//! `SavedLocation` is the flat record
//! `{x, y, sectorLabel, tableId?, timestamp}` with the timestamp in epoch
//! milliseconds.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PersistenceError, PersistenceResult};

/// The user's current pick on the floor plan.
///
/// `x`/`y` are model-space coordinates. For a table pick they are the table
/// center; for a zone pick they are the raw model point that was hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub x: f64,
    pub y: f64,
    pub sector_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<u32>,
}

impl Selection {
    /// Selection of a specific table.
    pub fn table(table_id: u32, x: f64, y: f64, sector_label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            sector_label: sector_label.into(),
            table_id: Some(table_id),
        }
    }

    /// Selection of a free point inside a zone.
    pub fn zone_point(x: f64, y: f64, sector_label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            sector_label: sector_label.into(),
            table_id: None,
        }
    }

    /// Whether this selection refers to a table rather than a free zone point.
    pub fn is_table(&self) -> bool {
        self.table_id.is_some()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.table_id {
            Some(id) => write!(
                f,
                "{} table #{} at ({:.1}, {:.1})",
                self.sector_label, id, self.x, self.y
            ),
            None => write!(f, "{} at ({:.1}, {:.1})", self.sector_label, self.x, self.y),
        }
    }
}

/// A confirmed selection, as written to persistent storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedLocation {
    pub x: f64,
    pub y: f64,
    pub sector_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<u32>,
    /// Confirmation time in milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl SavedLocation {
    /// Stamps a selection with the given confirmation time.
    pub fn from_selection(selection: Selection, timestamp: i64) -> Self {
        Self {
            x: selection.x,
            y: selection.y,
            sector_label: selection.sector_label,
            table_id: selection.table_id,
            timestamp,
        }
    }

    /// The selection this record was confirmed from (everything but the timestamp).
    pub fn selection(&self) -> Selection {
        Selection {
            x: self.x,
            y: self.y,
            sector_label: self.sector_label.clone(),
            table_id: self.table_id,
        }
    }

    /// Checks that a record read back from storage is usable.
    pub fn validate(&self) -> PersistenceResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(PersistenceError::CorruptRecord(format!(
                "non-finite coordinates ({}, {})",
                self.x, self.y
            )));
        }
        if self.sector_label.trim().is_empty() {
            return Err(PersistenceError::CorruptRecord(
                "empty sectorLabel".to_string(),
            ));
        }
        if self.timestamp < 0 {
            return Err(PersistenceError::CorruptRecord(format!(
                "negative timestamp {}",
                self.timestamp
            )));
        }
        Ok(())
    }

    /// Serializes to the flat JSON record.
    pub fn to_json(&self) -> PersistenceResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses and validates a flat JSON record.
    pub fn from_json(json: &str) -> PersistenceResult<Self> {
        let location: Self = serde_json::from_str(json)?;
        location.validate()?;
        Ok(location)
    }
}
