// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lock-related types for the Wyze Lock.
//!
//! This module provides the lock-state event emitted by the report decoder,
//! the state held by [`LockStateHolder`](crate::state::LockStateHolder), and
//! the actor tag describing who or what operated the lock.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// A discrete locked/unlocked transition decoded from a vendor report.
///
/// The decoder also knows which actor drove the transition (see
/// [`LockActor`]), but only the resulting binary state is published;
/// the actor is logged and discarded.
///
/// # Examples
///
/// ```
/// use wyzelock_lib::types::{LockEvent, LockState};
///
/// let event = LockEvent::Locked;
/// assert_eq!(LockState::from(event), LockState::Locked);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockEvent {
    /// The bolt was thrown.
    Locked,
    /// The bolt was retracted.
    Unlocked,
}

impl fmt::Display for LockEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked => write!(f, "locked"),
            Self::Unlocked => write!(f, "unlocked"),
        }
    }
}

/// The last-known state of the lock bolt.
///
/// # Examples
///
/// ```
/// use wyzelock_lib::types::LockState;
///
/// assert_eq!("locked".parse::<LockState>().unwrap(), LockState::Locked);
/// assert_eq!(LockState::Unlocked.attribute_value(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockState {
    /// The bolt is extended.
    Locked,
    /// The bolt is retracted.
    Unlocked,
}

impl LockState {
    /// Returns the lowercase string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::Unlocked => "unlocked",
        }
    }

    /// Returns the Door Lock cluster attribute value for this state.
    ///
    /// The Wyze firmware reports 1 for locked and 2 for unlocked.
    #[must_use]
    pub const fn attribute_value(&self) -> u8 {
        match self {
            Self::Locked => 1,
            Self::Unlocked => 2,
        }
    }
}

impl fmt::Display for LockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LockState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "locked" | "1" => Ok(Self::Locked),
            "unlocked" | "2" => Ok(Self::Unlocked),
            _ => Err(ValueError::InvalidLockState(s.to_string())),
        }
    }
}

impl From<LockEvent> for LockState {
    fn from(event: LockEvent) -> Self {
        match event {
            LockEvent::Locked => Self::Locked,
            LockEvent::Unlocked => Self::Unlocked,
        }
    }
}

/// The actor that drove a lock transition.
///
/// Known from the reverse-engineered report layout, logged for diagnostics,
/// and deliberately absent from the published [`LockEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockActor {
    /// Operated via the Wyze app.
    App,
    /// Operated by hand on the thumb turn.
    Manual,
    /// Re-locked by the auto-lock timer.
    AutoLock,
}

impl LockActor {
    /// Returns the lowercase string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Manual => "manual",
            Self::AutoLock => "auto-lock",
        }
    }
}

impl fmt::Display for LockActor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_state_as_str() {
        assert_eq!(LockState::Locked.as_str(), "locked");
        assert_eq!(LockState::Unlocked.as_str(), "unlocked");
    }

    #[test]
    fn lock_state_attribute_value() {
        assert_eq!(LockState::Locked.attribute_value(), 1);
        assert_eq!(LockState::Unlocked.attribute_value(), 2);
    }

    #[test]
    fn lock_state_from_str() {
        assert_eq!("locked".parse::<LockState>().unwrap(), LockState::Locked);
        assert_eq!("LOCKED".parse::<LockState>().unwrap(), LockState::Locked);
        assert_eq!("2".parse::<LockState>().unwrap(), LockState::Unlocked);
    }

    #[test]
    fn lock_state_from_str_invalid() {
        let result = "ajar".parse::<LockState>();
        assert!(matches!(result, Err(ValueError::InvalidLockState(_))));
    }

    #[test]
    fn lock_state_from_event() {
        assert_eq!(LockState::from(LockEvent::Locked), LockState::Locked);
        assert_eq!(LockState::from(LockEvent::Unlocked), LockState::Unlocked);
    }

    #[test]
    fn lock_actor_display() {
        assert_eq!(LockActor::App.to_string(), "app");
        assert_eq!(LockActor::Manual.to_string(), "manual");
        assert_eq!(LockActor::AutoLock.to_string(), "auto-lock");
    }

    #[test]
    fn lock_event_serde_round_trip() {
        let json = serde_json::to_string(&LockEvent::Unlocked).unwrap();
        let back: LockEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LockEvent::Unlocked);
    }
}
