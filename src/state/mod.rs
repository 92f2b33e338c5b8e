// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State holders owning the observable attributes.
//!
//! One holder per capability: [`LockStateHolder`] for the bolt,
//! [`ContactStateHolder`] for the door-position sensor. Each subscribes to
//! its event bus and relays state changes to the host through the
//! [`AttributeSink`](crate::types::AttributeSink).

mod contact_holder;
mod lock_holder;

pub use contact_holder::ContactStateHolder;
pub use lock_holder::LockStateHolder;
