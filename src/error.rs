// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `WyzeLock` library.
//!
//! Decoding itself never fails: short reports and unknown value combinations
//! are dropped silently because the vendor report format is undocumented and
//! unreliable. The errors here cover the remaining surfaces: value parsing
//! in the state types and listener failures during event delivery.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation or parsing.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A listener failed while handling a published event.
    #[error("listener error: {0}")]
    Listener(#[from] ListenerError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when converting strings into the state types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An invalid lock state string was provided.
    #[error("invalid lock state: {0}")]
    InvalidLockState(String),

    /// An invalid contact state string was provided.
    #[error("invalid contact state: {0}")]
    InvalidContactState(String),
}

/// A failure reported by a listener during event delivery.
///
/// Listener failures are isolated: the event bus logs them and continues
/// delivering to the remaining listeners, so one misbehaving subscriber
/// never starves its peers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("listener {listener} failed: {message}")]
pub struct ListenerError {
    /// Name of the listener that failed.
    pub listener: &'static str,
    /// Description of the failure.
    pub message: String,
}

impl ListenerError {
    /// Creates a new listener error.
    #[must_use]
    pub fn new(listener: &'static str, message: impl Into<String>) -> Self {
        Self {
            listener,
            message: message.into(),
        }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidLockState("ajar".to_string());
        assert_eq!(err.to_string(), "invalid lock state: ajar");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidContactState("tilted".to_string());
        let err: Error = value_err.into();
        assert!(matches!(
            err,
            Error::Value(ValueError::InvalidContactState(_))
        ));
    }

    #[test]
    fn listener_error_display() {
        let err = ListenerError::new("lock-state-holder", "sink unavailable");
        assert_eq!(
            err.to_string(),
            "listener lock-state-holder failed: sink unavailable"
        );
    }
}
