//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::cell::Cell;
use std::rc::Rc;

use crate::expected::Expected;

/// Counts how many [`Tracked`] payloads it handed out have been dropped.
///
/// Used to check that every live payload is released exactly once, whatever
/// sequence of clones, swaps and takes it went through.
#[derive(Debug, Clone, Default)]
pub struct DropCounter {
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so its drop is counted here.
    pub fn track(&self, value: i64) -> Tracked {
        Tracked {
            value,
            drops: Rc::clone(&self.drops),
        }
    }

    /// Drops observed so far.
    pub fn count(&self) -> usize {
        self.drops.get()
    }
}

/// A payload that reports its drop to a [`DropCounter`].
///
/// Clones report independently, so a clone and its source count as two drops.
#[derive(Debug, Clone)]
pub struct Tracked {
    value: i64,
    drops: Rc<Cell<usize>>,
}

impl Tracked {
    pub fn get(&self) -> i64 {
        self.value
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Shorthand for the container used throughout the tests.
pub type TestExpected = Expected<i64, String>;

/// Build a success or a failure from a flag, so strategies can pick either.
pub fn make_expected(is_success: bool, value: i64, error: &str) -> TestExpected {
    if is_success {
        Expected::success(value)
    } else {
        Expected::failure(error.to_string())
    }
}

/// Snapshot of a container as a plain `Result`, for comparing before/after.
pub fn snapshot(expected: &TestExpected) -> Result<i64, String> {
    expected.as_result().map(|v| *v).map_err(Clone::clone)
}
