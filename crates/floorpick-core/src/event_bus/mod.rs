//! # Event Bus Module
//!
//! Publish/subscribe of selection lifecycle events between the selection
//! engine and the surrounding UI layer.
//!
//! ## Usage
//!
//! ```rust
//! use floorpick_core::event_bus::{EventBus, EventCategory, EventFilter, SelectionEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Rejection]),
//!     |event| {
//!         if let SelectionEvent::Rejected { message } = event {
//!             println!("toast: {}", message);
//!         }
//!     },
//! );
//!
//! bus.publish(SelectionEvent::Rejected {
//!     message: "Tap inside the green area".to_string(),
//! })
//! .ok();
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
