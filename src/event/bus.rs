// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event bus for fanning decoded events out to state holders.

use std::sync::Arc;

use super::Listener;

/// In-process synchronous publish/subscribe fan-out for one event category.
///
/// One `publish` call invokes every registered listener in registration
/// order, on the calling thread, before returning. There is no queuing and
/// no replay: a listener registered after a publish never sees that event.
///
/// Duplicate registration is not deduplicated; registering the same listener
/// twice delivers each event to it twice.
///
/// # Failure isolation
///
/// A listener returning an error does not stop delivery. The failure is
/// logged and the remaining listeners still receive the event. Use
/// [`publish_counted`](Self::publish_counted) when the caller needs to know
/// how many listeners handled the event successfully.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use wyzelock_lib::event::{EventBus, Listener};
/// use wyzelock_lib::types::LockEvent;
/// use wyzelock_lib::error::ListenerError;
///
/// struct Logger;
///
/// impl Listener<LockEvent> for Logger {
///     fn name(&self) -> &'static str {
///         "logger"
///     }
///
///     fn on_event(&self, event: &LockEvent) -> Result<(), ListenerError> {
///         println!("lock is now {event}");
///         Ok(())
///     }
/// }
///
/// let mut bus = EventBus::new();
/// bus.subscribe(Arc::new(Logger));
/// bus.publish(&LockEvent::Locked);
/// ```
pub struct EventBus<E> {
    listeners: Vec<Arc<dyn Listener<E>>>,
}

impl<E> EventBus<E> {
    /// Creates a new event bus with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Registers a listener.
    ///
    /// Listeners are invoked in registration order. No uniqueness check is
    /// performed. Registration happens at construction time of the device
    /// context; the bus is not mutated during a publish.
    pub fn subscribe(&mut self, listener: Arc<dyn Listener<E>>) {
        self.listeners.push(listener);
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Publishes an event to all listeners.
    ///
    /// Listener failures are logged and swallowed; every listener is
    /// attempted regardless of its peers' outcome.
    pub fn publish(&self, event: &E) {
        let _ = self.deliver(event);
    }

    /// Publishes an event and returns the number of listeners that handled
    /// it successfully.
    ///
    /// Returns 0 if there are no listeners.
    #[must_use]
    pub fn publish_counted(&self, event: &E) -> usize {
        self.deliver(event)
    }

    fn deliver(&self, event: &E) -> usize {
        let mut delivered = 0;
        for listener in &self.listeners {
            match listener.on_event(event) {
                Ok(()) => delivered += 1,
                Err(error) => {
                    tracing::warn!(listener = listener.name(), %error, "listener failed, continuing delivery");
                }
            }
        }
        delivered
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}
