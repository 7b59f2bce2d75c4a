//! Error handling for floorpick
//!
//! Provides the error types shared by every layer of the selection engine:
//! - Geometry errors (layout defects found while building a registry)
//! - Persistence errors (the external save/load/clear collaborator failed)
//!
//! Neither kind is fatal. Geometry defects make the affected region
//! permanently non-matching; persistence failures only cost durability.
//! All error types use `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;

/// Geometry error type
///
/// Describes a defect in the static floor-plan layout. These are reported when
/// the zone registry is built and never raised from a hit test.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A zone polygon has fewer than three vertices
    #[error("Zone '{zone_id}' is degenerate: {vertices} vertices (at least 3 required)")]
    DegenerateZone {
        /// The identifier of the offending zone.
        zone_id: String,
        /// Number of vertices the zone was configured with.
        vertices: usize,
    },

    /// A zone polygon contains a non-finite coordinate
    #[error("Zone '{zone_id}' has a non-finite vertex")]
    NonFiniteVertex {
        /// The identifier of the offending zone.
        zone_id: String,
    },

    /// A table hit radius is zero, negative or not finite
    #[error("Table {table_id} has an invalid hit radius: {radius}")]
    InvalidHitRadius {
        /// The identifier of the offending table.
        table_id: u32,
        /// The configured radius.
        radius: f64,
    },

    /// Two zones share the same identifier
    #[error("Duplicate zone id: {0}")]
    DuplicateZoneId(String),

    /// Two tables share the same identifier
    #[error("Duplicate table id: {0}")]
    DuplicateTableId(u32),
}

/// Persistence error type
///
/// Raised by implementations of [`crate::store::LocationStore`]. The selection
/// state machine still transitions when one of these occurs.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The backing storage cannot be used at all (disabled, quota, missing directory)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A stored record exists but does not describe a valid saved location
    #[error("Corrupted saved location: {0}")]
    CorruptRecord(String),

    /// I/O error while touching the backing storage
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for persistence operations.
pub type PersistenceResult<T> = std::result::Result<T, PersistenceError>;
