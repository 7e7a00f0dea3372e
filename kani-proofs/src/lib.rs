// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the expected container.
//!
//! This standalone crate extracts the container's slot representation and
//! swap routine and proves their properties for every payload value.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Exclusivity**: exactly one of `value()` / `error()` returns `Some`
//! 2. **Swap exchange**: swap hands each side the other's slot
//! 3. **Swap involution**: swap twice restores both sides
//! 4. **Clone fidelity**: a clone equals its source

// ============================================================================
// CONTAINER (copied from src/expected.rs)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Slot<T, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, Slot::Success(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Slot::Success(value) => Some(value),
            Slot::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Slot::Failure(error) => Some(error),
            Slot::Success(_) => None,
        }
    }

    pub fn swap(&mut self, other: &mut Self) {
        match (self, other) {
            (Slot::Success(mine), Slot::Success(theirs)) => core::mem::swap(mine, theirs),
            (Slot::Failure(mine), Slot::Failure(theirs)) => core::mem::swap(mine, theirs),
            (mine, theirs) => core::mem::swap(mine, theirs),
        }
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_slot() -> Slot<u32, u8> {
        if kani::any() {
            Slot::Success(kani::any())
        } else {
            Slot::Failure(kani::any())
        }
    }

    /// Exactly one accessor yields a payload, and it matches the tag.
    #[kani::proof]
    fn verify_exclusive_access() {
        let slot = any_slot();

        kani::assert(
            slot.value().is_some() != slot.error().is_some(),
            "exactly one slot must be live",
        );
        kani::assert(
            slot.value().is_some() == slot.is_success(),
            "value() must agree with the discriminant",
        );
    }

    /// Swap hands each side the other's slot.
    #[kani::proof]
    fn verify_swap_exchanges() {
        let a = any_slot();
        let b = any_slot();
        let (mut x, mut y) = (a, b);

        x.swap(&mut y);

        kani::assert(x == b, "left must receive right's slot");
        kani::assert(y == a, "right must receive left's slot");
    }

    /// Swap twice is the identity, whichever side initiates.
    #[kani::proof]
    fn verify_swap_involution() {
        let a = any_slot();
        let b = any_slot();
        let (mut x, mut y) = (a, b);

        x.swap(&mut y);
        y.swap(&mut x);

        kani::assert(x == a && y == b, "swap twice must restore both sides");
    }

    /// A clone carries the same discriminant and payload.
    #[kani::proof]
    fn verify_clone_fidelity() {
        let a = any_slot();
        let copy = a.clone();

        kani::assert(copy == a, "clone must equal its source");
        kani::assert(
            copy.is_success() == a.is_success(),
            "clone must keep the discriminant",
        );
    }
}
