// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The Wyze Lock device context.
//!
//! [`WyzeLock`] is the composition root: it owns one event bus per category,
//! wires the two state holders to them at construction, and exposes
//! [`handle_report`](WyzeLock::handle_report) as the single ingress the host
//! runtime feeds with raw vendor reports. All wiring is explicit dependency
//! injection; nothing reaches into ambient device state.

use std::sync::Arc;

use crate::event::{EventBus, Listener};
use crate::report::decode_report;
use crate::state::{ContactStateHolder, LockStateHolder};
use crate::types::{AttributeSink, ContactEvent, ContactState, LockEvent, LockState};

/// A Wyze Lock bound to a host-provided attribute sink.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use wyzelock_lib::{AttributeId, AttributeSink, LockState, WyzeLock};
///
/// struct NullSink;
///
/// impl AttributeSink for NullSink {
///     fn update_attribute(&self, _attribute: AttributeId, _value: u8) {}
/// }
///
/// let lock = WyzeLock::new(Arc::new(NullSink));
///
/// let mut report = vec![0u8; 70];
/// report[52] = 126;
/// report[41] = 194;
/// lock.handle_report(&report);
///
/// assert_eq!(lock.lock_state(), Some(LockState::Locked));
/// ```
pub struct WyzeLock {
    lock_bus: EventBus<LockEvent>,
    contact_bus: EventBus<ContactEvent>,
    lock_holder: Arc<LockStateHolder>,
    contact_holder: Arc<ContactStateHolder>,
}

impl WyzeLock {
    /// Creates a device context with the two state holders as the only
    /// subscribers.
    #[must_use]
    pub fn new(sink: Arc<dyn AttributeSink>) -> Self {
        Self::builder(sink).build()
    }

    /// Returns a builder for registering additional listeners before the
    /// subscriber lists are frozen.
    #[must_use]
    pub fn builder(sink: Arc<dyn AttributeSink>) -> WyzeLockBuilder {
        WyzeLockBuilder {
            sink,
            lock_listeners: Vec::new(),
            contact_listeners: Vec::new(),
        }
    }

    /// Decodes a raw vendor report and dispatches the resulting events.
    ///
    /// This is the single ingress point, called by the host runtime once per
    /// received vendor-cluster message. Uninteresting reports produce no
    /// events and no errors; listener failures are isolated by the buses.
    pub fn handle_report(&self, report: &[u8]) {
        let events = decode_report(report);
        if let Some(event) = events.lock {
            self.lock_bus.publish(&event);
        }
        if let Some(event) = events.contact {
            self.contact_bus.publish(&event);
        }
    }

    /// Returns the last-known lock state.
    #[must_use]
    pub fn lock_state(&self) -> Option<LockState> {
        self.lock_holder.state()
    }

    /// Returns the last-known door-contact state.
    #[must_use]
    pub fn contact_state(&self) -> Option<ContactState> {
        self.contact_holder.state()
    }
}

impl std::fmt::Debug for WyzeLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WyzeLock")
            .field("lock_state", &self.lock_state())
            .field("contact_state", &self.contact_state())
            .field("lock_subscribers", &self.lock_bus.subscriber_count())
            .field("contact_subscribers", &self.contact_bus.subscriber_count())
            .finish()
    }
}

/// Builder for a [`WyzeLock`] with extra event listeners.
///
/// The state holders are always subscribed first, so host-side listeners
/// observe events after the holders have updated their attributes.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use wyzelock_lib::error::ListenerError;
/// use wyzelock_lib::event::Listener;
/// use wyzelock_lib::types::{AttributeId, AttributeSink, LockEvent};
/// use wyzelock_lib::WyzeLock;
///
/// struct NullSink;
///
/// impl AttributeSink for NullSink {
///     fn update_attribute(&self, _attribute: AttributeId, _value: u8) {}
/// }
///
/// struct AuditLog;
///
/// impl Listener<LockEvent> for AuditLog {
///     fn name(&self) -> &'static str {
///         "audit-log"
///     }
///
///     fn on_event(&self, event: &LockEvent) -> Result<(), ListenerError> {
///         println!("lock is now {event}");
///         Ok(())
///     }
/// }
///
/// let lock = WyzeLock::builder(Arc::new(NullSink))
///     .with_lock_listener(Arc::new(AuditLog))
///     .build();
/// ```
pub struct WyzeLockBuilder {
    sink: Arc<dyn AttributeSink>,
    lock_listeners: Vec<Arc<dyn Listener<LockEvent>>>,
    contact_listeners: Vec<Arc<dyn Listener<ContactEvent>>>,
}

impl WyzeLockBuilder {
    /// Registers an additional listener on the lock event bus.
    #[must_use]
    pub fn with_lock_listener(mut self, listener: Arc<dyn Listener<LockEvent>>) -> Self {
        self.lock_listeners.push(listener);
        self
    }

    /// Registers an additional listener on the contact event bus.
    #[must_use]
    pub fn with_contact_listener(mut self, listener: Arc<dyn Listener<ContactEvent>>) -> Self {
        self.contact_listeners.push(listener);
        self
    }

    /// Builds the device context and freezes the subscriber lists.
    #[must_use]
    pub fn build(self) -> WyzeLock {
        let lock_holder = Arc::new(LockStateHolder::new(self.sink.clone()));
        let contact_holder = Arc::new(ContactStateHolder::new(self.sink));

        let mut lock_bus = EventBus::new();
        lock_bus.subscribe(lock_holder.clone());
        for listener in self.lock_listeners {
            lock_bus.subscribe(listener);
        }

        let mut contact_bus = EventBus::new();
        contact_bus.subscribe(contact_holder.clone());
        for listener in self.contact_listeners {
            contact_bus.subscribe(listener);
        }

        WyzeLock {
            lock_bus,
            contact_bus,
            lock_holder,
            contact_holder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListenerError;
    use crate::types::AttributeId;

    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        updates: Mutex<Vec<(AttributeId, u8)>>,
    }

    impl RecordingSink {
        fn updates(&self) -> Vec<(AttributeId, u8)> {
            self.updates.lock().clone()
        }
    }

    impl AttributeSink for RecordingSink {
        fn update_attribute(&self, attribute: AttributeId, value: u8) {
            self.updates.lock().push((attribute, value));
        }
    }

    fn report_with(code: u8, detail: u8) -> Vec<u8> {
        let mut report = vec![0u8; 70];
        report[52] = code;
        report[41] = detail;
        report
    }

    #[test]
    fn new_device_has_no_state() {
        let lock = WyzeLock::new(Arc::new(RecordingSink::default()));
        assert_eq!(lock.lock_state(), None);
        assert_eq!(lock.contact_state(), None);
    }

    #[test]
    fn lock_report_updates_lock_holder_only() {
        let sink = Arc::new(RecordingSink::default());
        let lock = WyzeLock::new(sink.clone());

        lock.handle_report(&report_with(122, 194));

        assert_eq!(lock.lock_state(), Some(LockState::Locked));
        assert_eq!(lock.contact_state(), None);
        // Zone-type descriptor from construction, then the lock update.
        assert_eq!(
            sink.updates().last(),
            Some(&(AttributeId::LOCK_STATE, 1))
        );
    }

    #[test]
    fn contact_report_updates_contact_holder_only() {
        let lock = WyzeLock::new(Arc::new(RecordingSink::default()));

        lock.handle_report(&report_with(132, 209));

        assert_eq!(lock.contact_state(), Some(ContactState::Open));
        assert_eq!(lock.lock_state(), None);
    }

    #[test]
    fn short_report_changes_nothing() {
        let sink = Arc::new(RecordingSink::default());
        let lock = WyzeLock::new(sink.clone());
        let before = sink.updates();

        lock.handle_report(&[122, 194]);

        assert_eq!(lock.lock_state(), None);
        assert_eq!(sink.updates(), before);
    }

    #[test]
    fn builder_listener_sees_events_after_holder() {
        struct Probe {
            log: Arc<Mutex<Vec<LockEvent>>>,
        }

        impl Listener<LockEvent> for Probe {
            fn name(&self) -> &'static str {
                "probe"
            }

            fn on_event(&self, event: &LockEvent) -> Result<(), ListenerError> {
                self.log.lock().push(*event);
                Ok(())
            }
        }

        let log = Arc::new(Mutex::new(Vec::new()));
        let lock = WyzeLock::builder(Arc::new(RecordingSink::default()))
            .with_lock_listener(Arc::new(Probe { log: log.clone() }))
            .build();

        lock.handle_report(&report_with(189, 162));

        assert_eq!(*log.lock(), vec![LockEvent::Locked]);
        assert_eq!(lock.lock_state(), Some(LockState::Locked));
    }
}
