//! # Event Bus
//!
//! Central event distribution for decoupled communication between
//! storefront models, views and controllers using the observer pattern.
//!
//! Publishing is synchronous: every matching handler runs on the calling
//! thread, in subscription order, before `publish` returns. The subscriber
//! list is snapshotted before delivery, so a handler may publish or subscribe
//! again without disturbing the delivery in progress.

use super::store_events::{StoreEvent, Topic};
use anyhow::{Context, Result};
use regex::Regex;
use std::sync::{Arc, Mutex, MutexGuard};

/// Handler for events on a filtered topic
pub type EventHandler = Arc<dyn Fn(&StoreEvent) + Send + Sync>;

/// Handler that observes every published event together with its topic
pub type CatchAllHandler = Arc<dyn Fn(Topic, &StoreEvent) + Send + Sync>;

/// Event bus shared by every component for the lifetime of the process
pub type SharedEventBus = Arc<dyn EventBus>;

/// Which topics a subscription receives
#[derive(Debug, Clone)]
pub enum TopicFilter {
    /// A single topic
    Exact(Topic),
    /// Every topic whose wire name matches the expression
    Pattern(Regex),
}

impl TopicFilter {
    /// Build a pattern filter from a regular expression over topic names
    pub fn pattern(expression: &str) -> Result<Self> {
        let regex = Regex::new(expression)
            .with_context(|| format!("invalid topic pattern '{expression}'"))?;
        Ok(TopicFilter::Pattern(regex))
    }

    pub fn matches(&self, topic: Topic) -> bool {
        match self {
            TopicFilter::Exact(expected) => *expected == topic,
            TopicFilter::Pattern(regex) => regex.is_match(topic.as_str()),
        }
    }
}

impl From<Topic> for TopicFilter {
    fn from(topic: Topic) -> Self {
        TopicFilter::Exact(topic)
    }
}

/// Event bus for decoupled communication between components
pub trait EventBus: Send + Sync {
    /// Deliver an event to every matching subscriber
    fn publish(&self, event: StoreEvent);

    /// Subscribe to the topics selected by `filter`
    fn subscribe(&self, filter: TopicFilter, handler: EventHandler);

    /// Observe every published event
    fn subscribe_all(&self, handler: CatchAllHandler);
}

enum Subscriber {
    Filtered(TopicFilter, EventHandler),
    All(CatchAllHandler),
}

/// Simple in-memory event bus implementation
pub struct SimpleEventBus {
    subscribers: Mutex<Vec<Arc<Subscriber>>>,
}

impl SimpleEventBus {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Create a bus ready to be handed to components
    pub fn shared() -> SharedEventBus {
        Arc::new(Self::new())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Arc<Subscriber>>> {
        // A panicking handler never runs under this lock, so the list is intact
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, subscriber: Subscriber) {
        self.lock().push(Arc::new(subscriber));
    }

    /// Number of registered subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.lock().len()
    }
}

impl Default for SimpleEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus for SimpleEventBus {
    fn publish(&self, event: StoreEvent) {
        let topic = event.topic();
        let snapshot: Vec<Arc<Subscriber>> = self.lock().clone();

        for subscriber in snapshot {
            match subscriber.as_ref() {
                Subscriber::Filtered(filter, handler) => {
                    if filter.matches(topic) {
                        handler(&event);
                    }
                }
                Subscriber::All(handler) => handler(topic, &event),
            }
        }
    }

    fn subscribe(&self, filter: TopicFilter, handler: EventHandler) {
        self.push(Subscriber::Filtered(filter, handler));
    }

    fn subscribe_all(&self, handler: CatchAllHandler) {
        self.push(Subscriber::All(handler));
    }
}
