//! Selection session
//!
//! Wires one floor plan, the selection state machine and the event bus into
//! the pointer-to-confirmation pipeline used by a front end:
//!
//! ```text
//! handle_pointer(viewport point, element rect)
//!   -> CoordinateMapper -> ZoneRegistry::hit_test -> SelectionStateMachine
//!   -> SelectionEvent on the bus
//! ```

use std::sync::Arc;

use floorpick_core::{EventBus, EventBusError, LocationStore, SelectionEvent};
use floorpick_plan::{
    layouts, ElementRect, FloorPlan, SelectionState, SelectionStateMachine, Transition,
    ViewportPoint,
};
use floorpick_settings::{Config, JsonFileStore, LayoutKind, SettingsResult, UiSettings};

use crate::views::{ConfirmationView, StatusView};

/// Built-in floor plan for a configured layout.
pub fn floor_plan(kind: LayoutKind) -> FloorPlan {
    match kind {
        LayoutKind::PoolImage => layouts::pool_image(),
        LayoutKind::PoolVector => layouts::pool_vector(),
    }
}

/// One user's pick-and-confirm session on one floor plan.
pub struct SelectionSession {
    plan: FloorPlan,
    machine: SelectionStateMachine,
    bus: Arc<EventBus>,
    ui: UiSettings,
}

impl SelectionSession {
    /// Starts a session whose initial state comes from `store`.
    ///
    /// An unreadable record is logged, published as `PersistenceFailed` and
    /// treated as absent. Rejections are delivered through `bus`.
    pub fn restore(
        plan: FloorPlan,
        store: Box<dyn LocationStore>,
        bus: Arc<EventBus>,
        ui: UiSettings,
    ) -> Self {
        let (machine, warning) = SelectionStateMachine::restore(store, bus.clone());
        let machine = machine.with_rejection_message(ui.rejection_message.clone());

        let session = Self {
            plan,
            machine,
            bus,
            ui,
        };
        if let Some(err) = warning {
            session.publish(SelectionEvent::PersistenceFailed {
                operation: "load".to_string(),
                message: err.to_string(),
            });
        }
        tracing::info!(
            "Selection session started on '{}' in state {}",
            session.plan.name,
            session.machine.state().name()
        );
        session
    }

    /// Session for `config`: its layout, its storage file and its UI text.
    pub fn from_config(config: &Config, bus: Arc<EventBus>) -> SettingsResult<Self> {
        let store = JsonFileStore::from_config(config)?;
        tracing::debug!("Saved location file: {}", store.path().display());
        Ok(Self::restore(
            floor_plan(config.layout.plan),
            Box::new(store),
            bus,
            config.ui.clone(),
        ))
    }

    pub fn plan(&self) -> &FloorPlan {
        &self.plan
    }

    pub fn state(&self) -> &SelectionState {
        self.machine.state()
    }

    pub fn machine(&self) -> &SelectionStateMachine {
        &self.machine
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    pub fn ui(&self) -> &UiSettings {
        &self.ui
    }

    /// Runs a pointer event through mapping, hit testing and selection.
    ///
    /// A degenerate element rect cannot be mapped and counts as a miss.
    pub fn handle_pointer(&mut self, point: ViewportPoint, rect: &ElementRect) -> Transition {
        let transition = match self.plan.mapper().to_model_space(point, rect) {
            Some(model_point) => {
                let hit = self.plan.registry.hit_test(&model_point);
                self.machine.on_hit(model_point, &hit)
            }
            None => self.machine.reject(),
        };

        if let (Transition::Applied, Some(selection)) = (&transition, self.machine.selection()) {
            self.publish(SelectionEvent::Selected(selection.clone()));
        }
        transition
    }

    /// Drops the pending selection.
    pub fn clear(&mut self) -> Transition {
        let transition = self.machine.clear();
        if transition.changed_state() {
            self.publish(SelectionEvent::Cleared);
        }
        transition
    }

    /// Confirms the pending selection now.
    pub fn confirm(&mut self) -> Transition {
        let transition = self.machine.confirm();
        self.after_confirm(&transition);
        transition
    }

    /// Confirms the pending selection with an explicit epoch-millisecond time.
    pub fn confirm_at(&mut self, timestamp: i64) -> Transition {
        let transition = self.machine.confirm_at(timestamp);
        self.after_confirm(&transition);
        transition
    }

    /// Discards the selection, in memory and in storage.
    pub fn reset(&mut self) -> Transition {
        let transition = self.machine.reset();
        self.publish(SelectionEvent::Reset);
        self.report_persistence("clear", &transition);
        transition
    }

    /// Where to draw the selection marker inside `rect`.
    pub fn marker_position(&self, rect: &ElementRect) -> Option<ViewportPoint> {
        let (x, y) = match self.machine.state() {
            SelectionState::Empty => return None,
            SelectionState::Selected(selection) => (selection.x, selection.y),
            SelectionState::Confirmed(saved) => (saved.x, saved.y),
        };
        self.plan.mapper().to_viewport_space((x, y).into(), rect)
    }

    pub fn status_view(&self) -> StatusView {
        StatusView::from_state(self.machine.state(), self.ui.coordinate_decimals)
    }

    /// Present only once the selection is confirmed.
    pub fn confirmation_view(&self) -> Option<ConfirmationView> {
        self.machine
            .saved_location()
            .map(|saved| ConfirmationView::from_saved(saved, &self.ui.date_format))
    }

    fn after_confirm(&self, transition: &Transition) {
        if !transition.changed_state() {
            return;
        }
        if let Some(saved) = self.machine.saved_location() {
            self.publish(SelectionEvent::Confirmed(saved.clone()));
        }
        self.report_persistence("save", transition);
    }

    fn report_persistence(&self, operation: &str, transition: &Transition) {
        if let Some(err) = transition.persistence_error() {
            self.publish(SelectionEvent::PersistenceFailed {
                operation: operation.to_string(),
                message: err.to_string(),
            });
        }
    }

    fn publish(&self, event: SelectionEvent) {
        if let Err(EventBusError::NoSubscribers) = self.bus.publish(event) {
            tracing::trace!("Selection event had no subscribers");
        }
    }
}

impl std::fmt::Debug for SelectionSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionSession")
            .field("plan", &self.plan.name)
            .field("machine", &self.machine)
            .finish()
    }
}
