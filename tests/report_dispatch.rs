// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end tests: raw vendor report in, attribute updates out.

use std::sync::Arc;

use parking_lot::Mutex;

use wyzelock_lib::error::ListenerError;
use wyzelock_lib::event::Listener;
use wyzelock_lib::types::{
    AttributeId, AttributeSink, ContactEvent, ContactState, LockEvent, LockState,
};
use wyzelock_lib::WyzeLock;

/// Records every attribute update with its order of arrival.
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

/// Records lock events; optionally fails on every delivery.
struct LockProbe {
    name: &'static str,
    fail: bool,
    log: Arc<Mutex<Vec<(&'static str, LockEvent)>>>,
}

impl Listener<LockEvent> for LockProbe {
    fn name(&self) -> &'static str {
        self.name
    }

    fn on_event(&self, event: &LockEvent) -> Result<(), ListenerError> {
        if self.fail {
            return Err(ListenerError::new(self.name, "intentional failure"));
        }
        self.log.lock().push((self.name, *event));
        Ok(())
    }
}

fn report_with(code: u8, detail: u8) -> Vec<u8> {
    let mut report = vec![0u8; 70];
    report[52] = code;
    report[41] = detail;
    report
}

fn device() -> (WyzeLock, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    (WyzeLock::new(sink.clone()), sink)
}

#[test]
fn short_reports_emit_nothing() {
    let (lock, sink) = device();
    let baseline = sink.updates();

    for len in 0..70 {
        lock.handle_report(&vec![122u8; len]);
    }

    assert_eq!(lock.lock_state(), None);
    assert_eq!(lock.contact_state(), None);
    assert_eq!(sink.updates(), baseline);
}

#[test]
fn fake_report_emits_nothing_regardless_of_contents() {
    let (lock, sink) = device();
    let baseline = sink.updates();

    let mut report = report_with(122, 197);
    report[0] = 117;
    lock.handle_report(&report);

    assert_eq!(lock.lock_state(), None);
    assert_eq!(sink.updates(), baseline);
}

#[test]
fn app_unlock_updates_lock_attribute() {
    let (lock, sink) = device();

    lock.handle_report(&report_with(122, 197));

    assert_eq!(lock.lock_state(), Some(LockState::Unlocked));
    assert_eq!(lock.contact_state(), None);
    assert_eq!(sink.updates().last(), Some(&(AttributeId::LOCK_STATE, 2)));
}

#[test]
fn app_lock_updates_lock_attribute() {
    let (lock, sink) = device();

    lock.handle_report(&report_with(122, 194));

    assert_eq!(lock.lock_state(), Some(LockState::Locked));
    assert_eq!(sink.updates().last(), Some(&(AttributeId::LOCK_STATE, 1)));
}

#[test]
fn manual_and_app_unlock_are_indistinguishable_downstream() {
    let (manual, manual_sink) = device();
    let (app, app_sink) = device();

    manual.handle_report(&report_with(126, 197));
    app.handle_report(&report_with(122, 197));

    assert_eq!(manual.lock_state(), app.lock_state());
    assert_eq!(manual_sink.updates(), app_sink.updates());
}

#[test]
fn auto_lock_updates_lock_attribute() {
    let (lock, _sink) = device();

    lock.handle_report(&report_with(189, 162));

    assert_eq!(lock.lock_state(), Some(LockState::Locked));
}

#[test]
fn door_open_updates_zone_status_not_lock() {
    let (lock, sink) = device();

    lock.handle_report(&report_with(132, 209));

    assert_eq!(lock.contact_state(), Some(ContactState::Open));
    assert_eq!(lock.lock_state(), None);
    assert_eq!(sink.updates().last(), Some(&(AttributeId::ZONE_STATUS, 1)));
}

#[test]
fn door_closed_updates_zone_status() {
    let (lock, sink) = device();

    lock.handle_report(&report_with(132, 210));

    assert_eq!(lock.contact_state(), Some(ContactState::Closed));
    assert_eq!(sink.updates().last(), Some(&(AttributeId::ZONE_STATUS, 0)));
}

#[test]
fn unknown_combination_emits_nothing() {
    let (lock, sink) = device();
    let baseline = sink.updates();

    lock.handle_report(&report_with(93, 17));

    assert_eq!(lock.lock_state(), None);
    assert_eq!(lock.contact_state(), None);
    assert_eq!(sink.updates(), baseline);
}

#[test]
fn lock_then_unlock_round_trip() {
    let (lock, sink) = device();

    lock.handle_report(&report_with(122, 194));
    assert_eq!(lock.lock_state(), Some(LockState::Locked));

    lock.handle_report(&report_with(126, 197));
    assert_eq!(lock.lock_state(), Some(LockState::Unlocked));

    // The contact holder only saw its construction-time zone descriptor.
    let contact_writes: Vec<_> = sink
        .updates()
        .into_iter()
        .filter(|(id, _)| *id == AttributeId::ZONE_STATUS)
        .collect();
    assert!(contact_writes.is_empty());
    assert_eq!(lock.contact_state(), None);
}

#[test]
fn extra_listeners_receive_events_in_registration_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let lock = WyzeLock::builder(Arc::new(RecordingSink::default()))
        .with_lock_listener(Arc::new(LockProbe {
            name: "first",
            fail: false,
            log: log.clone(),
        }))
        .with_lock_listener(Arc::new(LockProbe {
            name: "second",
            fail: false,
            log: log.clone(),
        }))
        .build();

    lock.handle_report(&report_with(122, 194));

    assert_eq!(
        *log.lock(),
        vec![("first", LockEvent::Locked), ("second", LockEvent::Locked)]
    );
}

#[test]
fn failing_listener_does_not_starve_peers_or_holders() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let lock = WyzeLock::builder(Arc::new(RecordingSink::default()))
        .with_lock_listener(Arc::new(LockProbe {
            name: "broken",
            fail: true,
            log: log.clone(),
        }))
        .with_lock_listener(Arc::new(LockProbe {
            name: "healthy",
            fail: false,
            log: log.clone(),
        }))
        .build();

    lock.handle_report(&report_with(122, 197));

    assert_eq!(*log.lock(), vec![("healthy", LockEvent::Unlocked)]);
    assert_eq!(lock.lock_state(), Some(LockState::Unlocked));
}

#[test]
fn rapid_report_sequence_tracks_latest_state() {
    let (lock, _sink) = device();

    let sequence = [
        (122, 197, Some(LockState::Unlocked), None),
        (132, 209, Some(LockState::Unlocked), Some(ContactState::Open)),
        (132, 210, Some(LockState::Unlocked), Some(ContactState::Closed)),
        (189, 162, Some(LockState::Locked), Some(ContactState::Closed)),
    ];

    for (code, detail, expected_lock, expected_contact) in sequence {
        lock.handle_report(&report_with(code, detail));
        assert_eq!(lock.lock_state(), expected_lock);
        assert_eq!(lock.contact_state(), expected_contact);
    }
}

#[test]
fn events_serialize_for_host_journaling() {
    let json = serde_json::to_string(&LockEvent::Unlocked).unwrap();
    assert_eq!(json, "\"Unlocked\"");

    let event: ContactEvent = serde_json::from_str("\"Closed\"").unwrap();
    assert_eq!(event, ContactEvent::Closed);
}
