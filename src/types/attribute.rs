// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute identifiers and the egress hook towards the host runtime.
//!
//! The state holders do not talk to the Zigbee stack directly. Whatever
//! framework embeds this library provides an [`AttributeSink`] and relays
//! each `(attribute, value)` update onward, typically into its attribute
//! cache or device-state API.

use std::fmt;

/// Identifier of a cluster attribute updated by a state holder.
///
/// # Examples
///
/// ```
/// use wyzelock_lib::types::AttributeId;
///
/// assert_eq!(AttributeId::LOCK_STATE.value(), 0x0000);
/// assert_eq!(AttributeId::ZONE_STATUS.to_string(), "0x0002");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeId(u16);

impl AttributeId {
    /// Door Lock cluster lock-state attribute.
    pub const LOCK_STATE: Self = Self(0x0000);

    /// IAS Zone zone-type attribute, written once at construction.
    pub const ZONE_TYPE: Self = Self(0x0001);

    /// IAS Zone zone-status attribute carrying the contact bit.
    pub const ZONE_STATUS: Self = Self(0x0002);

    /// Creates an attribute identifier from a raw cluster attribute id.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Returns the raw attribute id.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// IAS Zone zone-type value identifying a contact switch.
pub const ZONE_TYPE_CONTACT_SWITCH: u8 = 0x15;

/// Hook through which state holders signal observable-attribute changes.
///
/// Implemented by the host runtime. Called synchronously from the report
/// delivery path, so implementations should be cheap and must not block.
///
/// # Examples
///
/// ```
/// use wyzelock_lib::types::{AttributeId, AttributeSink};
///
/// struct PrintSink;
///
/// impl AttributeSink for PrintSink {
///     fn update_attribute(&self, attribute: AttributeId, value: u8) {
///         println!("{attribute} = {value}");
///     }
/// }
/// ```
pub trait AttributeSink: Send + Sync {
    /// Records a new value for the given attribute.
    fn update_attribute(&self, attribute: AttributeId, value: u8);
}
