//! Notification contract
//!
//! Defines how the selection engine tells the UI layer that a pointer event
//! was rejected.

/// Message passed to the notifier when a pointer event hits nothing.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Toque na área verde para escolher sua posição";

/// Receives rejection notices for pointer events that hit nothing.
///
/// Fire-and-forget: the engine never inspects the outcome.
pub trait RejectionNotifier {
    /// Called once per missed pointer event.
    fn notify_rejected(&self, message: &str);
}

/// Notifier that only logs, for hosts without a toast surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl RejectionNotifier for LogNotifier {
    fn notify_rejected(&self, message: &str) {
        tracing::info!("Selection rejected: {}", message);
    }
}
