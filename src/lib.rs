// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `WyzeLock` Lib - A Rust library to decode Wyze Lock vendor status reports.
//!
//! The Wyze Lock (Yunding "Ford") announces lock and door-contact
//! transitions on a manufacturer-specific Zigbee cluster as long positional
//! byte dumps. This library decodes those dumps into two independent event
//! streams and keeps the resulting state observable for a host framework.
//!
//! # Supported Features
//!
//! - **Report decoding**: the reverse-engineered lookup table mapping report
//!   bytes 52/41 to lock and door-contact events
//! - **Event fan-out**: per-category synchronous event buses with failure
//!   isolation between listeners
//! - **State holding**: last-known lock and contact state, relayed to the
//!   host through an attribute-update hook
//!
//! Device discovery, pairing, and the Zigbee network layer are the host
//! framework's job; this library starts at the raw report and ends at the
//! attribute update.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use wyzelock_lib::{AttributeId, AttributeSink, LockState, WyzeLock};
//!
//! struct CacheSink;
//!
//! impl AttributeSink for CacheSink {
//!     fn update_attribute(&self, attribute: AttributeId, value: u8) {
//!         // Relay into the host's attribute cache.
//!         let _ = (attribute, value);
//!     }
//! }
//!
//! let lock = WyzeLock::new(Arc::new(CacheSink));
//!
//! // One raw vendor report per incoming cluster message.
//! let mut report = vec![0u8; 70];
//! report[52] = 122;
//! report[41] = 194;
//! lock.handle_report(&report);
//!
//! assert_eq!(lock.lock_state(), Some(LockState::Locked));
//! ```
//!
//! # Stateless Decoding
//!
//! The decoder can also be used on its own, without the device context:
//!
//! ```
//! use wyzelock_lib::report::decode_report;
//! use wyzelock_lib::types::ContactEvent;
//!
//! let mut report = vec![0u8; 70];
//! report[52] = 132;
//! report[41] = 209;
//!
//! let events = decode_report(&report);
//! assert_eq!(events.contact, Some(ContactEvent::Opened));
//! ```

mod device;
pub mod error;
pub mod event;
pub mod report;
pub mod state;
pub mod types;

pub use device::{WyzeLock, WyzeLockBuilder};
pub use error::{Error, ListenerError, Result, ValueError};
pub use event::{EventBus, Listener};
pub use report::{DecodedEvents, decode_report};
pub use state::{ContactStateHolder, LockStateHolder};
pub use types::{
    AttributeId, AttributeSink, ContactEvent, ContactState, LockActor, LockEvent, LockState,
};
