// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Holder for the last-known door-contact state.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::ListenerError;
use crate::event::Listener;
use crate::types::{
    AttributeId, AttributeSink, ContactEvent, ContactState, ZONE_TYPE_CONTACT_SWITCH,
};

/// Owns the door-contact observable attribute.
///
/// Subscribed to the contact event bus by the device context. At
/// construction it announces itself to the host as a contact-switch zone by
/// writing the zone-type attribute once; that descriptor is never
/// re-published. Each contact event then updates the zone-status attribute.
pub struct ContactStateHolder {
    sink: Arc<dyn AttributeSink>,
    state: RwLock<Option<ContactState>>,
}

impl ContactStateHolder {
    /// Creates a holder and publishes the contact-switch zone descriptor.
    #[must_use]
    pub fn new(sink: Arc<dyn AttributeSink>) -> Self {
        sink.update_attribute(AttributeId::ZONE_TYPE, ZONE_TYPE_CONTACT_SWITCH);
        Self {
            sink,
            state: RwLock::new(None),
        }
    }

    /// Returns the last-known contact state, if any report has been decoded yet.
    #[must_use]
    pub fn state(&self) -> Option<ContactState> {
        *self.state.read()
    }
}

impl Listener<ContactEvent> for ContactStateHolder {
    fn name(&self) -> &'static str {
        "contact-state-holder"
    }

    fn on_event(&self, event: &ContactEvent) -> Result<(), ListenerError> {
        let state = ContactState::from(*event);
        *self.state.write() = Some(state);
        self.sink
            .update_attribute(AttributeId::ZONE_STATUS, state.attribute_value());
        Ok(())
    }
}

impl std::fmt::Debug for ContactStateHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactStateHolder")
            .field("state", &self.state())
            .finish()
    }
}
