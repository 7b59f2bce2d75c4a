//! # Floorpick
//!
//! Pick a single table or lawn zone on a fixed floor plan by pointing at it,
//! confirm the choice, and remember it across sessions.
//!
//! ## Architecture
//!
//! Floorpick is organized as a workspace with multiple crates:
//!
//! 1. **floorpick-core** - Selection records, errors, storage and notifier contracts, events
//! 2. **floorpick-plan** - Geometry, coordinate mapping, zone registry, hit testing, state machine
//! 3. **floorpick-settings** - Configuration files and the JSON file store
//! 4. **floorpick** - Session facade and view models that integrate all crates
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use floorpick::{
//!     layouts, ElementRect, EventBus, MemoryStore, SelectionSession, UiSettings, ViewportPoint,
//! };
//!
//! let mut session = SelectionSession::restore(
//!     layouts::pool_vector(),
//!     Box::new(MemoryStore::new()),
//!     Arc::new(EventBus::new()),
//!     UiSettings::default(),
//! );
//!
//! // Plan rendered at half size
//! let rect = ElementRect::new(0.0, 0.0, 297.64, 420.945);
//! let _ = session.handle_pointer(ViewportPoint::new(33.76, 170.0), &rect);
//! assert_eq!(session.status_view().table_id, Some(1));
//! ```

pub mod session;
pub mod views;

pub use floorpick_core::{
    EventBus, EventBusConfig, EventCategory, EventFilter, LocationStore, LogNotifier, MemoryStore,
    PersistenceError, RejectionNotifier, SavedLocation, Selection, SelectionEvent, SubscriptionId,
};
pub use floorpick_plan::{
    layouts, ElementRect, FloorPlan, HitResult, ModelDimensions, ModelPoint, SelectionState,
    SelectionStateMachine, Transition, ViewportPoint, ZoneRegistry,
};
pub use floorpick_settings::{Config, JsonFileStore, LayoutKind, UiSettings};
pub use session::{floor_plan, SelectionSession};
pub use views::{ConfirmationView, StatusView};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support (INFO when unset)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!("Floorpick {} (built {})", VERSION, BUILD_DATE);
    Ok(())
}
