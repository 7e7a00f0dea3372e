//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use expected::Expected;
use proptest::prelude::*;

// Re-export canonical test utilities from expected::testing
pub use expected::testing::{make_expected, snapshot, DropCounter, TestExpected, Tracked};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Generate short error messages.
pub fn message_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z ]{0,12}").unwrap()
}

/// Generate a success or a failure with equal odds.
pub fn expected_strategy() -> impl Strategy<Value = TestExpected> {
    prop_oneof![
        any::<i64>().prop_map(Expected::success),
        message_strategy().prop_map(Expected::failure),
    ]
}

/// Operations applied to a pair of containers.
#[derive(Debug, Clone)]
pub enum PairOp {
    Swap,
    SwapBack,
    CloneLeftOverRight,
    TakeLeft,
    StdSwap,
}

pub fn pair_op_strategy() -> impl Strategy<Value = PairOp> {
    prop_oneof![
        Just(PairOp::Swap),
        Just(PairOp::SwapBack),
        Just(PairOp::CloneLeftOverRight),
        Just(PairOp::TakeLeft),
        Just(PairOp::StdSwap),
    ]
}

/// Apply `op` to the pair.
pub fn apply(op: &PairOp, left: &mut TestExpected, right: &mut TestExpected) {
    match op {
        PairOp::Swap => left.swap(right),
        PairOp::SwapBack => right.swap(left),
        PairOp::CloneLeftOverRight => *right = left.clone(),
        PairOp::TakeLeft => *right = left.take(),
        PairOp::StdSwap => std::mem::swap(left, right),
    }
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Exactly one accessor works, and it is the one the discriminant names.
pub fn assert_exclusive<T, E>(expected: &Expected<T, E>) {
    assert_eq!(expected.try_value().is_ok(), expected.is_success());
    assert_eq!(expected.try_error().is_ok(), !expected.is_success());
    assert_ne!(expected.try_value().is_ok(), expected.try_error().is_ok());
}

/// True if `f` panics. Silences nothing; the default hook still prints.
pub fn panics<F: FnOnce() + std::panic::UnwindSafe>(f: F) -> bool {
    std::panic::catch_unwind(f).is_err()
}
