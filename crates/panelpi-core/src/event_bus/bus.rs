//! Event bus for panel events
//!
//! Handlers registered with [`EventBus::subscribe`] run synchronously on the
//! publishing thread. Async consumers poll a broadcast [`EventBus::receiver`].

use parking_lot::RwLock;
use std::collections::{HashMap, VecDeque};
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{AppEvent, EventCategory};

/// Handle returned by [`EventBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Which events a handler wants
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    #[default]
    All,
    /// Only events in one of these categories
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

struct Subscriber {
    filter: EventFilter,
    handler: Box<dyn Fn(&AppEvent) + Send + Sync>,
}

/// Event bus sizing
#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Capacity of the broadcast channel behind [`EventBus::receiver`]
    pub channel_capacity: usize,
    /// Keep the most recent events for [`EventBus::history`]
    pub enable_history: bool,
    /// Number of events kept when history is enabled
    pub history_size: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
            enable_history: false,
            history_size: 500,
        }
    }
}

/// Publish/subscribe hub for printer and UI events
pub struct EventBus {
    config: EventBusConfig,
    sender: broadcast::Sender<AppEvent>,
    subscribers: RwLock<HashMap<SubscriptionId, Subscriber>>,
    history: RwLock<VecDeque<AppEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    pub fn with_config(config: EventBusConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity.max(1));
        Self {
            config,
            sender,
            subscribers: RwLock::new(HashMap::new()),
            history: RwLock::new(VecDeque::new()),
        }
    }

    /// Deliver `event` to matching handlers and all receivers
    ///
    /// Returns how many handlers and receivers got the event. Zero is not an
    /// error: the panel publishes whether or not anyone listens.
    pub fn publish(&self, event: AppEvent) -> usize {
        if self.config.enable_history {
            self.record(&event);
        }

        let mut delivered = 0;
        for subscriber in self.subscribers.read().values() {
            if subscriber.filter.matches(&event) {
                (subscriber.handler)(&event);
                delivered += 1;
            }
        }

        delivered + self.sender.send(event).unwrap_or(0)
    }

    /// Register a synchronous handler
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&AppEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.subscribers.write().insert(
            id,
            Subscriber {
                filter,
                handler: Box::new(handler),
            },
        );
        tracing::debug!("Event subscription {} added", id);
        id
    }

    /// Remove a handler. Returns false if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.subscribers.write().remove(&id).is_some();
        if removed {
            tracing::debug!("Event subscription {} removed", id);
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Receiver for async consumers; lagging receivers lose the oldest events
    pub fn receiver(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Retained events, oldest first. Empty unless history is enabled.
    pub fn history(&self) -> Vec<AppEvent> {
        self.history.read().iter().cloned().collect()
    }

    pub fn clear_history(&self) {
        self.history.write().clear();
    }

    pub fn config(&self) -> &EventBusConfig {
        &self.config
    }

    fn record(&self, event: &AppEvent) {
        let mut history = self.history.write();
        if history.len() >= self.config.history_size {
            history.pop_front();
        }
        if self.config.history_size > 0 {
            history.push_back(event.clone());
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{PrinterAction, PrinterStatus};
    use crate::event_bus::events::{PrinterEvent, UiEvent};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn snapshot_event() -> AppEvent {
        AppEvent::Printer(PrinterEvent::SnapshotReceived {
            status: PrinterStatus::Active,
            fraction_printed: 10.0,
        })
    }

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let bus = EventBus::new();

        let id = bus.subscribe(EventFilter::All, |_| {});
        assert_eq!(bus.subscriber_count(), 1);

        assert!(bus.unsubscribe(id));
        assert_eq!(bus.subscriber_count(), 0);
        assert!(!bus.unsubscribe(id));
    }

    #[test]
    fn test_publish_without_listeners_delivers_nothing() {
        let bus = EventBus::new();
        assert_eq!(bus.publish(snapshot_event()), 0);
    }

    #[test]
    fn test_event_filtering() {
        let bus = EventBus::new();
        let printer_count = Arc::new(AtomicUsize::new(0));
        let ui_count = Arc::new(AtomicUsize::new(0));

        let pc = printer_count.clone();
        bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Printer]),
            move |_| {
                pc.fetch_add(1, Ordering::SeqCst);
            },
        );

        let uc = ui_count.clone();
        bus.subscribe(EventFilter::Categories(vec![EventCategory::Ui]), move |_| {
            uc.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(bus.publish(snapshot_event()), 1);
        bus.publish(AppEvent::Ui(UiEvent::ActionDispatched(PrinterAction::Pause)));
        bus.publish(snapshot_event());

        assert_eq!(printer_count.load(Ordering::SeqCst), 2);
        assert_eq!(ui_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_history_keeps_most_recent() {
        let bus = EventBus::with_config(EventBusConfig {
            enable_history: true,
            history_size: 2,
            ..Default::default()
        });

        bus.publish(AppEvent::Ui(UiEvent::ActionDispatched(PrinterAction::Pause)));
        bus.publish(snapshot_event());
        bus.publish(AppEvent::Ui(UiEvent::ActionDispatched(PrinterAction::Resume)));

        assert_eq!(
            bus.history(),
            vec![
                snapshot_event(),
                AppEvent::Ui(UiEvent::ActionDispatched(PrinterAction::Resume)),
            ]
        );

        bus.clear_history();
        assert!(bus.history().is_empty());
    }

    #[test]
    fn test_history_disabled_by_default() {
        let bus = EventBus::new();
        bus.publish(snapshot_event());
        assert!(bus.history().is_empty());
    }

    #[tokio::test]
    async fn test_async_receiver() {
        let bus = EventBus::new();
        let mut rx = bus.receiver();

        assert_eq!(bus.publish(snapshot_event()), 1);
        assert_eq!(rx.recv().await.unwrap(), snapshot_event());
    }
}
