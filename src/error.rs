// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Usage errors for [`Expected`](crate::Expected) accessors.
//!
//! Asking a failure for its value, or a success for its error, is a bug in the
//! caller. The panicking accessors raise these as panics; the `try_*` accessors
//! hand them back as ordinary `Err` values.

use std::fmt;

/// Which accessor was called on the wrong slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessError {
    /// The value was requested but the container holds a failure.
    MissingValue,
    /// The error was requested but the container holds a success.
    NoErrorPresent,
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::MissingValue => write!(f, "missing value"),
            AccessError::NoErrorPresent => write!(f, "no error present"),
        }
    }
}

impl std::error::Error for AccessError {}
