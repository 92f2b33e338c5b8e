// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Holder for the last-known lock state.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::ListenerError;
use crate::event::Listener;
use crate::types::{AttributeId, AttributeSink, LockEvent, LockState};

/// Owns the lock-state observable attribute.
///
/// Subscribed to the lock event bus by the device context. On every lock
/// event it records the new state and signals the host through the
/// [`AttributeSink`] with the Door Lock cluster's lock-state attribute.
/// Re-applying the current state is harmless; the sink is signalled again.
pub struct LockStateHolder {
    sink: Arc<dyn AttributeSink>,
    state: RwLock<Option<LockState>>,
}

impl LockStateHolder {
    /// Creates a holder with no known state.
    #[must_use]
    pub fn new(sink: Arc<dyn AttributeSink>) -> Self {
        Self {
            sink,
            state: RwLock::new(None),
        }
    }

    /// Returns the last-known lock state, if any report has been decoded yet.
    #[must_use]
    pub fn state(&self) -> Option<LockState> {
        *self.state.read()
    }
}

impl Listener<LockEvent> for LockStateHolder {
    fn name(&self) -> &'static str {
        "lock-state-holder"
    }

    fn on_event(&self, event: &LockEvent) -> Result<(), ListenerError> {
        let state = LockState::from(*event);
        *self.state.write() = Some(state);
        self.sink
            .update_attribute(AttributeId::LOCK_STATE, state.attribute_value());
        Ok(())
    }
}

impl std::fmt::Debug for LockStateHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockStateHolder")
            .field("state", &self.state())
            .finish()
    }
}
