// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The success-or-failure container.
//!
//! `Expected<T, E>` holds exactly one of two payloads: a success value `T` or a
//! failure value `E`. The storage is a private enum, so "both" and "neither" are
//! not representable and there is no inactive slot to read by accident.
//!
//! Two kinds of "error" live here and they are not the same thing:
//!
//! - A **failure** is data. `Expected::failure(e)` is a normal return value that
//!   callers inspect with [`is_success`](Expected::is_success) and
//!   [`error`](Expected::error).
//! - A **usage error** is a bug: calling [`value`](Expected::value) on a failure
//!   or [`error`](Expected::error) on a success. Those calls panic with an
//!   [`AccessError`] message. Use [`try_value`](Expected::try_value) and
//!   [`try_error`](Expected::try_error) to get the same check without the panic.
//!
//! # Example
//!
//! ```
//! use expected::Expected;
//!
//! let ok: Expected<f64, String> = Expected::success(1.0);
//! assert!(ok.is_success());
//! assert_eq!(*ok.value(), 1.0);
//!
//! let failed: Expected<f64, String> = Expected::failure("error occurred".to_string());
//! assert_eq!(failed.error(), "error occurred");
//! assert_eq!(failed.as_option(), None);
//! ```

use std::fmt;
use std::mem;

use serde::{Deserialize, Serialize};

use crate::contracts;
use crate::error::AccessError;

/// The single storage slot. Exactly one alternative is live.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Slot<T, E> {
    Success(T),
    Failure(E),
}

/// A value-or-error holder.
///
/// Serializes as `{"success": value}` or `{"failure": error}`.
#[derive(PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expected<T, E> {
    slot: Slot<T, E>,
}

#[cold]
#[track_caller]
fn access_fault(err: AccessError) -> ! {
    panic!("{}", err)
}

impl<T, E> Expected<T, E> {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Wrap a success value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self {
            slot: Slot::Success(value),
        }
    }

    /// Wrap a failure value.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self {
            slot: Slot::Failure(error),
        }
    }

    // ========================================================================
    // DISCRIMINANT
    // ========================================================================

    /// True if the success slot is live.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.slot, Slot::Success(_))
    }

    /// True if the failure slot is live.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    // ========================================================================
    // ACCESS
    // ========================================================================

    /// Borrow the success value.
    ///
    /// # Panics
    /// Panics with `"missing value"` if this is a failure.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.slot {
            Slot::Success(value) => value,
            Slot::Failure(_) => access_fault(AccessError::MissingValue),
        }
    }

    /// Mutably borrow the success value.
    ///
    /// # Panics
    /// Panics with `"missing value"` if this is a failure.
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match &mut self.slot {
            Slot::Success(value) => value,
            Slot::Failure(_) => access_fault(AccessError::MissingValue),
        }
    }

    /// Consume the container and return the success value.
    ///
    /// # Panics
    /// Panics with `"missing value"` if this is a failure.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.slot {
            Slot::Success(value) => value,
            Slot::Failure(_) => access_fault(AccessError::MissingValue),
        }
    }

    /// Borrow the failure value.
    ///
    /// # Panics
    /// Panics with `"no error present"` if this is a success.
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &E {
        match &self.slot {
            Slot::Failure(error) => error,
            Slot::Success(_) => access_fault(AccessError::NoErrorPresent),
        }
    }

    /// Mutably borrow the failure value.
    ///
    /// # Panics
    /// Panics with `"no error present"` if this is a success.
    #[inline]
    #[track_caller]
    pub fn error_mut(&mut self) -> &mut E {
        match &mut self.slot {
            Slot::Failure(error) => error,
            Slot::Success(_) => access_fault(AccessError::NoErrorPresent),
        }
    }

    /// Consume the container and return the failure value.
    ///
    /// # Panics
    /// Panics with `"no error present"` if this is a success.
    #[track_caller]
    pub fn into_error(self) -> E {
        match self.slot {
            Slot::Failure(error) => error,
            Slot::Success(_) => access_fault(AccessError::NoErrorPresent),
        }
    }

    /// Borrow the success value, or report the misuse as `Err`.
    #[inline]
    pub fn try_value(&self) -> Result<&T, AccessError> {
        match &self.slot {
            Slot::Success(value) => Ok(value),
            Slot::Failure(_) => Err(AccessError::MissingValue),
        }
    }

    /// Borrow the failure value, or report the misuse as `Err`.
    #[inline]
    pub fn try_error(&self) -> Result<&E, AccessError> {
        match &self.slot {
            Slot::Failure(error) => Ok(error),
            Slot::Success(_) => Err(AccessError::NoErrorPresent),
        }
    }

    // ========================================================================
    // SWAP / MOVE
    // ========================================================================

    /// Exchange the contents of two containers.
    ///
    /// Same discriminant swaps the payloads in place. Differing discriminants
    /// exchange the slots whole, so each side ends with the other's payload and
    /// tag. No payload is cloned or dropped along the way.
    pub fn swap(&mut self, other: &mut Self) {
        let (was_self, was_other) = (self.is_success(), other.is_success());

        match (&mut self.slot, &mut other.slot) {
            (Slot::Success(mine), Slot::Success(theirs)) => mem::swap(mine, theirs),
            (Slot::Failure(mine), Slot::Failure(theirs)) => mem::swap(mine, theirs),
            (mine, theirs) => mem::swap(mine, theirs),
        }

        contracts::check_swap_exchanged(was_self, was_other, self, other);
    }

    /// Move the contents out, leaving a default success behind.
    pub fn take(&mut self) -> Self
    where
        T: Default,
    {
        mem::take(self)
    }

    /// Replace the contents, returning the previous container.
    pub fn replace(&mut self, with: Self) -> Self {
        mem::replace(self, with)
    }

    // ========================================================================
    // VIEWS
    // ========================================================================

    /// `Some(&value)` for a success, `None` for a failure.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        match &self.slot {
            Slot::Success(value) => Some(value),
            Slot::Failure(_) => None,
        }
    }

    /// Convert into `Option<T>`, discarding any failure.
    pub fn ok(self) -> Option<T> {
        contracts::check_view_consistency(&self);
        match self.slot {
            Slot::Success(value) => Some(value),
            Slot::Failure(_) => None,
        }
    }

    /// Convert into `Option<E>`, discarding any success.
    pub fn err(self) -> Option<E> {
        match self.slot {
            Slot::Success(_) => None,
            Slot::Failure(error) => Some(error),
        }
    }

    /// Borrow both slots as a std `Result`.
    #[inline]
    pub fn as_result(&self) -> Result<&T, &E> {
        match &self.slot {
            Slot::Success(value) => Ok(value),
            Slot::Failure(error) => Err(error),
        }
    }

    /// Convert into a std `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self.slot {
            Slot::Success(value) => Ok(value),
            Slot::Failure(error) => Err(error),
        }
    }

    /// A container of borrows.
    pub fn as_ref(&self) -> Expected<&T, &E> {
        match &self.slot {
            Slot::Success(value) => Expected::success(value),
            Slot::Failure(error) => Expected::failure(error),
        }
    }

    // ========================================================================
    // COMBINATORS
    // ========================================================================

    pub fn map<U, F>(self, f: F) -> Expected<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self.slot {
            Slot::Success(value) => Expected::success(f(value)),
            Slot::Failure(error) => Expected::failure(error),
        }
    }

    pub fn map_err<G, F>(self, f: F) -> Expected<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self.slot {
            Slot::Success(value) => Expected::success(value),
            Slot::Failure(error) => Expected::failure(f(error)),
        }
    }

    pub fn and_then<U, F>(self, f: F) -> Expected<U, E>
    where
        F: FnOnce(T) -> Expected<U, E>,
    {
        match self.slot {
            Slot::Success(value) => f(value),
            Slot::Failure(error) => Expected::failure(error),
        }
    }

    /// The success value, or `default` for a failure.
    pub fn value_or(self, default: T) -> T {
        match self.slot {
            Slot::Success(value) => value,
            Slot::Failure(_) => default,
        }
    }
}

impl<T: Clone, E: Clone> Clone for Expected<T, E> {
    fn clone(&self) -> Self {
        let copy = Self {
            slot: self.slot.clone(),
        };
        contracts::check_clone_fidelity(self, &copy);
        copy
    }
}

impl<T: Default, E> Default for Expected<T, E> {
    fn default() -> Self {
        Self::success(T::default())
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Expected<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Success(value) => f.debug_tuple("Success").field(value).finish(),
            Slot::Failure(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Expected<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Success(value) => write!(f, "success({})", value),
            Slot::Failure(error) => write!(f, "failure({})", error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Expected<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T, E> From<Expected<T, E>> for Result<T, E> {
    fn from(expected: Expected<T, E>) -> Self {
        expected.into_result()
    }
}

impl<T, E> From<Expected<T, E>> for Option<T> {
    fn from(expected: Expected<T, E>) -> Self {
        expected.ok()
    }
}

impl<T, E> From<&Expected<T, E>> for bool {
    fn from(expected: &Expected<T, E>) -> Self {
        expected.is_success()
    }
}
