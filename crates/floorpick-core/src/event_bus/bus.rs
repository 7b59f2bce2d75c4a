//! Synchronous selection event bus.
//!
//! Handlers run on the publishing thread, in subscription order, before
//! `publish` returns. A bounded log of recent events can be kept for
//! late subscribers and for tests.

use parking_lot::RwLock;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use super::events::{EventCategory, SelectionEvent};
use crate::listener::RejectionNotifier;

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let simple = self.0.simple().to_string();
        write!(f, "sub-{}", &simple[..8])
    }
}

/// Which events a subscriber wants.
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    #[default]
    All,
    /// Any event whose category is listed.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    pub fn matches(&self, event: &SelectionEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(wanted) => wanted.contains(&event.category()),
        }
    }
}

/// Bus settings.
#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Record published events in an in-memory log.
    pub keep_history: bool,
    /// Oldest entries are dropped beyond this many.
    pub history_limit: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            keep_history: false,
            history_limit: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventBusError {
    /// The event was published while nobody was subscribed.
    #[error("No active subscribers")]
    NoSubscribers,
}

type Handler = Arc<dyn Fn(&SelectionEvent) + Send + Sync>;

struct Subscription {
    id: SubscriptionId,
    filter: EventFilter,
    handler: Handler,
}

/// Publish/subscribe hub for [`SelectionEvent`]s.
pub struct EventBus {
    subscriptions: RwLock<Vec<Subscription>>,
    log: RwLock<VecDeque<SelectionEvent>>,
    config: EventBusConfig,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    pub fn with_config(config: EventBusConfig) -> Self {
        Self {
            subscriptions: RwLock::new(Vec::new()),
            log: RwLock::new(VecDeque::with_capacity(config.history_limit.min(64))),
            config,
        }
    }

    /// Delivers `event` to every subscriber whose filter matches.
    ///
    /// Returns how many handlers ran. The event is still logged when there
    /// are no subscribers, but the caller gets `NoSubscribers`.
    pub fn publish(&self, event: SelectionEvent) -> Result<usize, EventBusError> {
        tracing::trace!("Event: {}", event.description());

        if self.config.keep_history {
            self.record(&event);
        }

        // Handlers run after the lock is released so they may (un)subscribe
        let handlers: Vec<Handler> = {
            let subscriptions = self.subscriptions.read();
            if subscriptions.is_empty() {
                return Err(EventBusError::NoSubscribers);
            }
            subscriptions
                .iter()
                .filter(|s| s.filter.matches(&event))
                .map(|s| Arc::clone(&s.handler))
                .collect()
        };

        for handler in &handlers {
            handler(&event);
        }
        Ok(handlers.len())
    }

    /// Registers a handler.
    ///
    /// Handlers may subscribe or unsubscribe, but must not publish on this bus.
    /// A handler removed during a publish still sees that event.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&SelectionEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::generate();
        self.subscriptions.write().push(Subscription {
            id,
            filter,
            handler: Arc::new(handler),
        });
        tracing::debug!("Subscriber {} registered", id);
        id
    }

    /// Returns false when `id` was not (or no longer) subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscriptions = self.subscriptions.write();
        let before = subscriptions.len();
        subscriptions.retain(|s| s.id != id);
        let removed = subscriptions.len() != before;
        if removed {
            tracing::debug!("Subscriber {} dropped", id);
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.read().len()
    }

    /// Logged events, oldest first. Always empty when history is off.
    pub fn history(&self) -> Vec<SelectionEvent> {
        self.log.read().iter().cloned().collect()
    }

    pub fn clear_history(&self) {
        self.log.write().clear();
    }

    pub fn config(&self) -> &EventBusConfig {
        &self.config
    }

    fn record(&self, event: &SelectionEvent) {
        let mut log = self.log.write();
        log.push_back(event.clone());
        let excess = log.len().saturating_sub(self.config.history_limit);
        log.drain(..excess);
    }
}

impl RejectionNotifier for EventBus {
    fn notify_rejected(&self, message: &str) {
        let rejected = SelectionEvent::Rejected {
            message: message.to_string(),
        };
        if self.publish(rejected).is_err() {
            tracing::debug!("Rejection with no listener: {}", message);
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("config", &self.config)
            .finish()
    }
}
