//! Typed publish/subscribe handles.
//!
//! An [`EventEmitter`] owns the sending side; it hands out [`Event`] handles that
//! can only subscribe. All handles cloned from one emitter share one subscriber
//! list. Every subscriber gets its own unbounded queue, so no value is dropped
//! for a slow reader and every subscriber sees the same values in the same order.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::mpsc;
use tracing::trace;

type Subscribers<T> = Arc<Mutex<Vec<mpsc::UnboundedSender<T>>>>;

/// Owner side of an event.
pub struct EventEmitter<T: Clone> {
    subscribers: Subscribers<T>,
}

impl<T: Clone> EventEmitter<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Publish `value` to current subscribers. Returns how many received it.
    ///
    /// Firing with no subscribers is not an error. Subscribers whose receiver
    /// was dropped are pruned here.
    pub fn fire(&self, value: T) -> usize {
        let mut subs = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subs.retain(|tx| tx.send(value.clone()).is_ok());
        let delivered = subs.len();
        trace!(event = "core.events.fired", delivered = delivered);
        delivered
    }

    /// The subscribe-only handle for this emitter.
    pub fn event(&self) -> Event<T> {
        Event {
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<T: Clone> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> fmt::Debug for EventEmitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("subscribers", &self.event().subscriber_count())
            .finish()
    }
}

/// Subscribe-only handle to an [`EventEmitter`].
pub struct Event<T: Clone> {
    subscribers: Subscribers<T>,
}

impl<T: Clone> Event<T> {
    /// Start receiving values fired after this call.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }

    /// Live subscribers; dropped receivers are not counted.
    pub fn subscriber_count(&self) -> usize {
        let mut subs = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subs.retain(|tx| !tx.is_closed());
        subs.len()
    }

    /// Whether both handles deliver from the same emitter.
    pub fn same_source(&self, other: &Event<T>) -> bool {
        Arc::ptr_eq(&self.subscribers, &other.subscribers)
    }
}

impl<T: Clone> Clone for Event<T> {
    fn clone(&self) -> Self {
        Self {
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<T: Clone> fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
