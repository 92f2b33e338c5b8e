// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Door-contact types for the Wyze Lock.
//!
//! The lock carries a built-in door-position sensor exposed as an IAS Zone
//! contact switch. These types describe its open/closed transitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// A discrete door-contact transition decoded from a vendor report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactEvent {
    /// The door moved away from the frame.
    Opened,
    /// The door came to rest against the frame.
    Closed,
}

impl fmt::Display for ContactEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opened => write!(f, "opened"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// The last-known state of the door contact.
///
/// # Examples
///
/// ```
/// use wyzelock_lib::types::ContactState;
///
/// assert_eq!("open".parse::<ContactState>().unwrap(), ContactState::Open);
/// assert_eq!(ContactState::Closed.attribute_value(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactState {
    /// The door is ajar.
    Open,
    /// The door is shut.
    Closed,
}

impl ContactState {
    /// Returns the lowercase string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Returns the IAS Zone status value for this state (1 open, 0 closed).
    #[must_use]
    pub const fn attribute_value(&self) -> u8 {
        match self {
            Self::Open => 1,
            Self::Closed => 0,
        }
    }
}

impl fmt::Display for ContactState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContactState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" | "1" => Ok(Self::Open),
            "closed" | "0" => Ok(Self::Closed),
            _ => Err(ValueError::InvalidContactState(s.to_string())),
        }
    }
}

impl From<ContactEvent> for ContactState {
    fn from(event: ContactEvent) -> Self {
        match event {
            ContactEvent::Opened => Self::Open,
            ContactEvent::Closed => Self::Closed,
        }
    }
}
