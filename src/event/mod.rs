// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system connecting the report decoder to the state holders.
//!
//! Each event category (lock, contact) has its own [`EventBus`]. Buses are
//! strictly synchronous: `publish` invokes every listener on the calling
//! thread, in registration order, and returns when the last one has run.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use wyzelock_lib::error::ListenerError;
//! use wyzelock_lib::event::{EventBus, Listener};
//! use wyzelock_lib::types::ContactEvent;
//!
//! struct DoorChime;
//!
//! impl Listener<ContactEvent> for DoorChime {
//!     fn name(&self) -> &'static str {
//!         "door-chime"
//!     }
//!
//!     fn on_event(&self, event: &ContactEvent) -> Result<(), ListenerError> {
//!         if *event == ContactEvent::Opened {
//!             // ding
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut bus = EventBus::new();
//! bus.subscribe(Arc::new(DoorChime));
//! bus.publish(&ContactEvent::Opened);
//! ```

mod bus;

pub use bus::EventBus;

use crate::error::ListenerError;

/// A subscriber on an [`EventBus`] for one event category.
///
/// Each category gets its own trait object type (`Listener<LockEvent>`,
/// `Listener<ContactEvent>`), so a listener's interest is fixed at compile
/// time rather than matched by callback name at runtime.
pub trait Listener<E>: Send + Sync {
    /// A short stable name used in log output when the listener fails.
    fn name(&self) -> &'static str;

    /// Handles a published event.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError`] if the listener cannot process the event.
    /// The bus logs the failure and continues with the remaining listeners.
    fn on_event(&self, event: &E) -> Result<(), ListenerError>;
}
