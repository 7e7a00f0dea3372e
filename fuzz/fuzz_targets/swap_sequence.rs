// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for container operation sequences.
//!
//! Drives two containers through arbitrary swaps, clones, takes and replaces,
//! mirroring each step on a pair of std `Result`s, and checks after every step
//! that both sides still agree with the mirror.

#![no_main]

use arbitrary::Arbitrary;
use expected::contracts::check_view_consistency;
use expected::Expected;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Seed {
    Success(u32),
    Failure(String),
}

#[derive(Debug, Arbitrary)]
enum Op {
    Swap,
    SwapBack,
    CloneLeftOverRight,
    TakeRight,
    ReplaceLeft(Seed),
}

#[derive(Debug, Arbitrary)]
struct Input {
    left: Seed,
    right: Seed,
    ops: Vec<Op>,
}

fn build(seed: Seed) -> Expected<u32, String> {
    match seed {
        Seed::Success(v) => Expected::success(v),
        Seed::Failure(e) => Expected::failure(e),
    }
}

fn mirror(c: &Expected<u32, String>) -> Result<u32, String> {
    c.as_result().map(|v| *v).map_err(Clone::clone)
}

/// Any sequence of operations keeps both containers in step with the mirror.
fuzz_target!(|input: Input| {
    let mut left = build(input.left);
    let mut right = build(input.right);
    let (mut mirror_left, mut mirror_right) = (mirror(&left), mirror(&right));

    for op in input.ops.into_iter().take(64) {
        match op {
            Op::Swap => {
                left.swap(&mut right);
                std::mem::swap(&mut mirror_left, &mut mirror_right);
            }
            Op::SwapBack => {
                right.swap(&mut left);
                std::mem::swap(&mut mirror_left, &mut mirror_right);
            }
            Op::CloneLeftOverRight => {
                right = left.clone();
                mirror_right = mirror_left.clone();
            }
            Op::TakeRight => {
                left = right.take();
                mirror_left = std::mem::replace(&mut mirror_right, Ok(0));
            }
            Op::ReplaceLeft(seed) => {
                let fresh = build(seed);
                mirror_left = mirror(&fresh);
                left.replace(fresh);
            }
        }

        check_view_consistency(&left);
        check_view_consistency(&right);
        assert_eq!(mirror(&left), mirror_left);
        assert_eq!(mirror(&right), mirror_right);
    }
});
