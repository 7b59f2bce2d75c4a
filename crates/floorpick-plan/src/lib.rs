//! # Floorpick Plan
//!
//! The spatial selection engine: turns a pointer position on a rendered floor
//! plan into a validated selection of a table or zone.
//!
//! ## Core Components
//!
//! - **Geometry**: points tagged with their coordinate space, rectangles
//! - **Viewport**: viewport <-> model coordinate mapping
//! - **Registry**: ordered, immutable catalogue of zones and tables
//! - **Layouts**: the built-in floor plans
//! - **Hit testing**: table priority, then even-odd polygon containment
//! - **Selection manager**: the Empty / Selected / Confirmed state machine
//!
//! ## Architecture
//!
//! ```text
//! pointer (viewport space)
//!   └── CoordinateMapper ──> model point
//!         └── hit_test (ZoneRegistry) ──> HitResult
//!               └── SelectionStateMachine ──> SavedLocation (on confirm)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use floorpick_core::{LogNotifier, MemoryStore};
//! use floorpick_plan::{layouts, ElementRect, SelectionStateMachine, ViewportPoint};
//!
//! let plan = layouts::pool_vector();
//! let mapper = plan.mapper();
//! let mut machine =
//!     SelectionStateMachine::new(Box::new(MemoryStore::new()), Arc::new(LogNotifier));
//!
//! let rect = ElementRect::new(0.0, 0.0, 595.28, 841.89);
//! if let Some(point) = mapper.to_model_space(ViewportPoint::new(67.52, 340.0), &rect) {
//!     let hit = plan.registry.hit_test(&point);
//!     let _ = machine.on_hit(point, &hit);
//! }
//! assert_eq!(machine.selection().and_then(|s| s.table_id), Some(1));
//! ```

pub mod geometry;
pub mod layouts;
pub mod registry;
pub mod selection_manager;
pub mod viewport;

pub use geometry::{ElementRect, ModelDimensions, ModelPoint, ViewportPoint};
pub use hit_test::{hit_test, polygon_contains, HitResult};
pub use layouts::FloorPlan;
pub use registry::{Table, Zone, ZoneRegistry};
pub use selection_manager::{
    SelectionState, SelectionStateMachine, Transition, DEFAULT_REJECTION_MESSAGE,
};
pub use viewport::CoordinateMapper;
