//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so they can be logged or replayed.

use serde::{Deserialize, Serialize};

use crate::data::{SavedLocation, Selection};

/// Everything the selection engine announces to the surrounding UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionEvent {
    /// A hit produced a new current selection.
    Selected(Selection),
    /// A pointer event landed outside every selectable region.
    Rejected {
        /// User-facing explanation.
        message: String,
    },
    /// The current selection was dropped.
    Cleared,
    /// The current selection was confirmed and stamped.
    Confirmed(SavedLocation),
    /// All selection state was discarded.
    Reset,
    /// The storage collaborator failed; the in-memory state is still correct.
    PersistenceFailed {
        /// Which storage operation failed ("save", "load" or "clear").
        operation: String,
        /// The underlying error text.
        message: String,
    },
}

impl SelectionEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            SelectionEvent::Selected(_)
            | SelectionEvent::Cleared
            | SelectionEvent::Confirmed(_)
            | SelectionEvent::Reset => EventCategory::Selection,
            SelectionEvent::Rejected { .. } => EventCategory::Rejection,
            SelectionEvent::PersistenceFailed { .. } => EventCategory::Persistence,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            SelectionEvent::Selected(selection) => format!("Selected {}", selection),
            SelectionEvent::Rejected { message } => format!("Rejected: {}", message),
            SelectionEvent::Cleared => "Selection cleared".to_string(),
            SelectionEvent::Confirmed(saved) => {
                format!("Confirmed {} at {}", saved.sector_label, saved.timestamp)
            }
            SelectionEvent::Reset => "Selection reset".to_string(),
            SelectionEvent::PersistenceFailed { operation, message } => {
                format!("Persistence {} failed: {}", operation, message)
            }
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Selection lifecycle events.
    Selection,
    /// Rejected pointer events.
    Rejection,
    /// Storage failures.
    Persistence,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Rejection => write!(f, "Rejection"),
            EventCategory::Persistence => write!(f, "Persistence"),
        }
    }
}
