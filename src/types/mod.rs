// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types shared across the library.
//!
//! - [`LockEvent`] / [`LockState`] / [`LockActor`] - lock-side events and state
//! - [`ContactEvent`] / [`ContactState`] - door-contact events and state
//! - [`AttributeId`] / [`AttributeSink`] - the egress seam towards the host

mod attribute;
mod contact;
mod lock;

pub use attribute::{AttributeId, AttributeSink, ZONE_TYPE_CONTACT_SWITCH};
pub use contact::{ContactEvent, ContactState};
pub use lock::{LockActor, LockEvent, LockState};
