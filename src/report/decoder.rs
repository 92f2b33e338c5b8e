// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoder for the Wyze Lock's proprietary vendor-cluster status report.
//!
//! The report is a flat attribute dump. Among its positions only two carry
//! the state transition: byte 52 (the event code) and byte 41 (the event
//! detail). Their meaningful combinations were reverse-engineered by
//! watching live traffic; the protocol itself is undocumented. The decoder
//! is therefore a closed lookup table over those two bytes, not a
//! generalized parser, and unknown combinations produce no event rather
//! than an error.

use crate::types::{ContactEvent, LockActor, LockEvent};

/// Reports shorter than this never carry a decodable transition and are
/// dropped before any indexed access.
pub const MIN_REPORT_LEN: usize = 70;

/// Position of the event code byte within the report.
pub const EVENT_CODE_OFFSET: usize = 52;

/// Position of the event detail byte within the report.
pub const EVENT_DETAIL_OFFSET: usize = 41;

/// First-byte marker of periodic status dumps that look like events but
/// carry no lock transition.
pub const FAKE_REPORT_MARKER: u8 = 117;

/// One row of the lock-event lookup table.
struct LockRule {
    code: u8,
    detail: u8,
    event: LockEvent,
    actor: LockActor,
}

/// Reverse-engineered lock-event combinations of (code, detail).
///
/// Evaluated top to bottom, first match wins. The ordering is load-bearing:
/// it resolves combinations that would otherwise be ambiguous, so new rows
/// must be appended with care.
const LOCK_RULES: [LockRule; 5] = [
    LockRule {
        code: 122,
        detail: 197,
        event: LockEvent::Unlocked,
        actor: LockActor::App,
    },
    LockRule {
        code: 122,
        detail: 194,
        event: LockEvent::Locked,
        actor: LockActor::App,
    },
    LockRule {
        code: 126,
        detail: 197,
        event: LockEvent::Unlocked,
        actor: LockActor::Manual,
    },
    LockRule {
        code: 126,
        detail: 194,
        event: LockEvent::Locked,
        actor: LockActor::Manual,
    },
    LockRule {
        code: 189,
        detail: 162,
        event: LockEvent::Locked,
        actor: LockActor::AutoLock,
    },
];

/// Reverse-engineered door-contact combinations of (code, detail).
///
/// Evaluated independently of the lock table; first match wins.
const CONTACT_RULES: [(u8, u8, ContactEvent); 2] = [
    (132, 209, ContactEvent::Opened),
    (132, 210, ContactEvent::Closed),
];

/// The events decoded from a single vendor report.
///
/// A report yields at most one lock event and at most one contact event.
/// With the known constants the two tables use disjoint event codes, so in
/// practice at most one field is set; the decoder still evaluates both
/// tables for every report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodedEvents {
    /// Lock transition, if the report matched the lock table.
    pub lock: Option<LockEvent>,
    /// Door-contact transition, if the report matched the contact table.
    pub contact: Option<ContactEvent>,
}

impl DecodedEvents {
    /// Returns `true` if the report produced no event.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lock.is_none() && self.contact.is_none()
    }

    /// Returns the number of decoded events (0, 1, or 2).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.lock.is_some() as usize + self.contact.is_some() as usize
    }
}

/// Decodes a raw vendor report into zero, one, or two semantic events.
///
/// Short reports, periodic status dumps, and unknown byte combinations all
/// decode to nothing; none of them is an error. The report is read at fixed
/// positions only and never retained.
///
/// # Examples
///
/// ```
/// use wyzelock_lib::report::{decode_report, EVENT_CODE_OFFSET, EVENT_DETAIL_OFFSET};
/// use wyzelock_lib::types::LockEvent;
///
/// let mut report = vec![0u8; 70];
/// report[EVENT_CODE_OFFSET] = 122;
/// report[EVENT_DETAIL_OFFSET] = 194;
///
/// let events = decode_report(&report);
/// assert_eq!(events.lock, Some(LockEvent::Locked));
/// assert_eq!(events.contact, None);
/// ```
#[must_use]
pub fn decode_report(report: &[u8]) -> DecodedEvents {
    // Sole guard against out-of-range access; must run before any indexing.
    if report.len() < MIN_REPORT_LEN {
        tracing::trace!(len = report.len(), "report too short, ignoring");
        return DecodedEvents::default();
    }

    let code = report[EVENT_CODE_OFFSET];
    let detail = report[EVENT_DETAIL_OFFSET];
    tracing::trace!(
        code,
        detail,
        aux_56 = report[56],
        aux_57 = report[57],
        "inspecting report"
    );

    if report[0] == FAKE_REPORT_MARKER {
        tracing::trace!("periodic status dump, ignoring");
        return DecodedEvents::default();
    }

    let lock = LOCK_RULES
        .iter()
        .find(|rule| rule.code == code && rule.detail == detail)
        .map(|rule| {
            tracing::debug!(event = %rule.event, actor = %rule.actor, "decoded lock event");
            rule.event
        });

    // The contact table is checked even when the lock table matched.
    let contact = CONTACT_RULES
        .iter()
        .find(|&&(c, d, _)| c == code && d == detail)
        .map(|&(_, _, event)| {
            tracing::debug!(event = %event, "decoded door-contact event");
            event
        });

    DecodedEvents { lock, contact }
}
