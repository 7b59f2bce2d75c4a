//! Selection state machine
//!
//! Tracks the pick-and-confirm workflow: `Empty`, `Selected`, `Confirmed`.
//! Confirming writes the location to the [`LocationStore`] and resetting
//! erases it. Storage failures never block a transition; they come back as
//! [`Transition::Degraded`].

use std::sync::Arc;

use floorpick_core::{
    LocationStore, PersistenceError, RejectionNotifier, SavedLocation, Selection,
};

use crate::geometry::ModelPoint;
use crate::hit_test::HitResult;

pub use floorpick_core::DEFAULT_REJECTION_MESSAGE;

/// Where the user is in the pick-and-confirm workflow.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    /// Nothing picked.
    #[default]
    Empty,
    /// A pick exists but is not confirmed yet.
    Selected(Selection),
    /// The pick was confirmed and is locked until reset.
    Confirmed(SavedLocation),
}

impl SelectionState {
    pub fn name(&self) -> &'static str {
        match self {
            SelectionState::Empty => "Empty",
            SelectionState::Selected(_) => "Selected",
            SelectionState::Confirmed(_) => "Confirmed",
        }
    }
}

/// Outcome of one transition request.
#[derive(Debug)]
#[must_use]
pub enum Transition {
    /// The state changed and storage (if touched) succeeded.
    Applied,
    /// The request does not apply in the current state; nothing happened.
    Ignored,
    /// The pointer event hit nothing; state unchanged, rejection notified.
    Rejected,
    /// The state changed but the storage collaborator failed.
    Degraded(PersistenceError),
}

impl Transition {
    /// Whether the in-memory state changed.
    pub fn changed_state(&self) -> bool {
        matches!(self, Transition::Applied | Transition::Degraded(_))
    }

    pub fn persistence_error(&self) -> Option<&PersistenceError> {
        match self {
            Transition::Degraded(err) => Some(err),
            _ => None,
        }
    }
}

/// Holds the current and confirmed selection and applies the workflow rules.
///
/// # Selection Model
///
/// - **Empty**: initial state, unless a saved location was restored
/// - **Selected**: replaced by every successful hit
/// - **Confirmed**: reached only via `confirm()`, left only via `reset()`
///
/// The machine owns its storage collaborator. Storage failures never block a
/// transition; they are reported through [`Transition::Degraded`].
pub struct SelectionStateMachine {
    state: SelectionState,
    store: Box<dyn LocationStore>,
    notifier: Arc<dyn RejectionNotifier>,
    rejection_message: String,
}

impl SelectionStateMachine {
    /// Creates a machine in the `Empty` state without reading storage.
    pub fn new(store: Box<dyn LocationStore>, notifier: Arc<dyn RejectionNotifier>) -> Self {
        Self {
            state: SelectionState::Empty,
            store,
            notifier,
            rejection_message: DEFAULT_REJECTION_MESSAGE.to_string(),
        }
    }

    /// Creates a machine whose initial state reflects what storage holds.
    ///
    /// A stored record puts the machine in `Confirmed`. An unreadable store
    /// leaves it `Empty` and the error is handed back as a warning.
    pub fn restore(
        store: Box<dyn LocationStore>,
        notifier: Arc<dyn RejectionNotifier>,
    ) -> (Self, Option<PersistenceError>) {
        let mut machine = Self::new(store, notifier);
        match machine.store.load() {
            Ok(Some(saved)) => {
                tracing::info!(
                    "Restored saved location in {} from {}",
                    saved.sector_label,
                    saved.timestamp
                );
                machine.state = SelectionState::Confirmed(saved);
                (machine, None)
            }
            Ok(None) => (machine, None),
            Err(err) => {
                tracing::warn!("Could not restore saved location: {}", err);
                (machine, Some(err))
            }
        }
    }

    /// Overrides the message sent to the notifier on a miss.
    pub fn with_rejection_message(mut self, message: impl Into<String>) -> Self {
        self.rejection_message = message.into();
        self
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// The pending (unconfirmed) selection.
    pub fn selection(&self) -> Option<&Selection> {
        match &self.state {
            SelectionState::Selected(selection) => Some(selection),
            _ => None,
        }
    }

    /// The confirmed location.
    pub fn saved_location(&self) -> Option<&SavedLocation> {
        match &self.state {
            SelectionState::Confirmed(saved) => Some(saved),
            _ => None,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self.state, SelectionState::Confirmed(_))
    }

    pub fn rejection_message(&self) -> &str {
        &self.rejection_message
    }

    pub fn store(&self) -> &dyn LocationStore {
        self.store.as_ref()
    }

    /// Applies a hit result for the model point that produced it.
    ///
    /// Table hits select the table center; zone hits select `point` itself.
    /// A miss notifies and leaves the state alone. Ignored once confirmed.
    pub fn on_hit(&mut self, point: ModelPoint, hit: &HitResult<'_>) -> Transition {
        if self.is_confirmed() {
            tracing::debug!("Ignoring {} at {}: selection is locked", hit, point);
            return Transition::Ignored;
        }

        let selection = match hit {
            HitResult::TableHit(table) => Selection::table(
                table.id,
                table.center.x,
                table.center.y,
                table.sector_label.clone(),
            ),
            HitResult::ZoneHit(zone) => {
                Selection::zone_point(point.x, point.y, zone.sector_label.clone())
            }
            HitResult::Miss => {
                tracing::debug!("Rejected pointer at {}", point);
                return self.reject();
            }
        };

        tracing::debug!("Selected {}", selection);
        self.state = SelectionState::Selected(selection);
        Transition::Applied
    }

    /// Rejects a pointer event that could not be placed on the plan.
    pub fn reject(&mut self) -> Transition {
        if self.is_confirmed() {
            return Transition::Ignored;
        }
        self.notifier.notify_rejected(&self.rejection_message);
        Transition::Rejected
    }

    /// Drops a pending selection.
    pub fn clear(&mut self) -> Transition {
        match self.state {
            SelectionState::Selected(_) => {
                self.state = SelectionState::Empty;
                Transition::Applied
            }
            _ => Transition::Ignored,
        }
    }

    /// Confirms the pending selection, stamped with the current time.
    pub fn confirm(&mut self) -> Transition {
        self.confirm_at(chrono::Utc::now().timestamp_millis())
    }

    /// Confirms the pending selection with an explicit epoch-millisecond
    /// timestamp and persists it.
    pub fn confirm_at(&mut self, timestamp: i64) -> Transition {
        let selection = match &self.state {
            SelectionState::Selected(selection) => selection.clone(),
            SelectionState::Empty => {
                tracing::debug!("Confirm requested with nothing selected");
                return Transition::Ignored;
            }
            SelectionState::Confirmed(_) => return Transition::Ignored,
        };

        let saved = SavedLocation::from_selection(selection, timestamp);
        let result = self.store.save(&saved);
        tracing::info!("Confirmed {}", saved.selection());
        self.state = SelectionState::Confirmed(saved);

        match result {
            Ok(()) => Transition::Applied,
            Err(err) => {
                tracing::warn!("Saved location was not persisted: {}", err);
                Transition::Degraded(err)
            }
        }
    }

    /// Discards all selection state, in memory and in storage.
    pub fn reset(&mut self) -> Transition {
        let previous = std::mem::take(&mut self.state);
        tracing::info!("Selection reset from {}", previous.name());

        match self.store.clear() {
            Ok(()) => Transition::Applied,
            Err(err) => {
                tracing::warn!("Saved location was not erased: {}", err);
                Transition::Degraded(err)
            }
        }
    }
}

impl std::fmt::Debug for SelectionStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionStateMachine")
            .field("state", &self.state)
            .field("rejection_message", &self.rejection_message)
            .finish()
    }
}
