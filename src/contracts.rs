//! Runtime contracts for the container invariants.
//!
//! Debug-mode assertions that re-check what the type already promises. They
//! are zero-cost in release builds (`debug_assert!`) and exist to catch a
//! regression in `swap` or `clone` the moment a test exercises it.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                   |
//! |----------------------------|--------------------------------------------|
//! | `check_clone_fidelity`     | a copy keeps the source's discriminant     |
//! | `check_swap_exchanged`     | swap exchanges discriminants               |
//! | `check_view_consistency`   | bool view and option view agree with tag   |
//!
//! # Usage
//!
//! ```ignore
//! use expected::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_clone_fidelity(&original, &copy);
//!
//! // In release builds, this is a no-op
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The inactive alternative costs no storage beyond the tag.
const _: () = {
    use std::mem::size_of;

    const WORD: usize = size_of::<usize>();

    assert!(size_of::<Expected<[u8; 64], [u8; 32]>>() <= 64 + WORD);
    assert!(size_of::<Expected<u64, u64>>() <= size_of::<u64>() + WORD);
    // Niche: a non-null pointer payload leaves room for the tag.
    assert!(size_of::<Expected<Box<u8>, ()>>() <= 2 * WORD);
};

use crate::expected::Expected;

// ============================================================================
// COPY CONTRACTS
// ============================================================================

/// Check that a clone carries the same discriminant as its source.
///
/// # Panics (debug builds only)
/// Panics if `copy.is_success() != original.is_success()`.
#[inline]
pub fn check_clone_fidelity<T, E>(original: &Expected<T, E>, copy: &Expected<T, E>) {
    // INVARIANT: copy.is_success() == original.is_success()
    debug_assert_eq!(
        original.is_success(),
        copy.is_success(),
        "Contract violation: clone changed the discriminant"
    );
}

// ============================================================================
// SWAP CONTRACTS
// ============================================================================

/// Check that a swap exchanged the two discriminants.
///
/// `was_left` and `was_right` are the discriminants captured before the swap.
///
/// # Panics (debug builds only)
/// Panics if either side did not end up with the other side's discriminant.
#[inline]
pub fn check_swap_exchanged<T, E>(
    was_left: bool,
    was_right: bool,
    left: &Expected<T, E>,
    right: &Expected<T, E>,
) {
    // INVARIANT: (left, right) tags == (was_right, was_left)
    debug_assert!(
        left.is_success() == was_right && right.is_success() == was_left,
        "Contract violation: swap left discriminants ({}, {}), expected ({}, {})",
        left.is_success(),
        right.is_success(),
        was_right,
        was_left
    );
}

// ============================================================================
// VIEW CONTRACTS
// ============================================================================

/// Check that the boolean and optional views agree with the discriminant,
/// and that exactly one accessor succeeds.
///
/// # Panics (debug builds only)
/// Panics if any view disagrees with `is_success()`.
#[inline]
pub fn check_view_consistency<T, E>(expected: &Expected<T, E>) {
    let tag = expected.is_success();

    // INVARIANT: bool(c) == c.as_option().is_some() == c.is_success()
    debug_assert_eq!(
        bool::from(expected),
        tag,
        "Contract violation: bool view disagrees with discriminant"
    );
    debug_assert_eq!(
        expected.as_option().is_some(),
        tag,
        "Contract violation: option view disagrees with discriminant"
    );
    debug_assert!(
        expected.try_value().is_ok() != expected.try_error().is_ok(),
        "Contract violation: value and error accessors must be exclusive"
    );
}
