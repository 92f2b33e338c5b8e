// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vendor report decoding.
//!
//! The Wyze Lock announces every state transition on its manufacturer
//! cluster (0xFC00) as a long positional byte dump. [`decode_report`] turns
//! one such dump into at most one lock event and at most one door-contact
//! event; everything it does not recognize it drops without complaint.

mod decoder;

pub use decoder::{
    DecodedEvents, EVENT_CODE_OFFSET, EVENT_DETAIL_OFFSET, FAKE_REPORT_MARKER, MIN_REPORT_LEN,
    decode_report,
};

/// Cluster id of the Wyze manufacturer-specific cluster the reports arrive on.
pub const WYZE_CLUSTER_ID: u16 = 0xFC00;
