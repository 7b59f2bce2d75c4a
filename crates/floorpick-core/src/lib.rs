//! # Floorpick Core
//!
//! Core types, contracts, and events for floorpick.
//! Provides the selection data model, the error types, the storage and
//! notification contracts the selection engine talks to, and the event bus.

pub mod data;
pub mod error;
pub mod event_bus;
pub mod listener;
pub mod store;

pub use data::{SavedLocation, Selection};

pub use error::{GeometryError, PersistenceError, PersistenceResult};

pub use event_bus::{
    EventBus, EventBusConfig, EventBusError, EventCategory, EventFilter, SelectionEvent,
    SubscriptionId,
};

pub use listener::{LogNotifier, RejectionNotifier, DEFAULT_REJECTION_MESSAGE};

pub use store::{LocationStore, MemoryStore};
