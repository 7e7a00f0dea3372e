//! The reference scenarios for the container, each spelled out once.

use super::common::panics;
use expected::{try_extract, variant, Expected, MISSING_ALTERNATIVE};

variant! {
    #[derive(Debug, Clone, PartialEq)]
    enum IntOrDouble {
        Int(i32),
        Double(f64),
    }
}

#[test]
fn success_of_one_point_zero() {
    let result: Expected<f64, String> = Expected::success(1.0);

    assert!(result.is_success());
    assert_eq!(*result.value(), 1.0);

    let probe = result.clone();
    assert!(panics(move || {
        probe.error();
    }));
}

#[test]
fn failure_with_message() {
    let result: Expected<f64, String> = Expected::failure("error occurred".to_string());

    assert!(!result.is_success());
    assert_eq!(result.error(), "error occurred");

    let probe = result.clone();
    assert!(panics(move || {
        probe.value();
    }));
}

#[test]
fn extract_double_from_int_fails() {
    let v = IntOrDouble::Int(1);
    let got = try_extract::<f64, _>(&v);

    assert!(!got.is_success());
    assert_eq!(got.error(), MISSING_ALTERNATIVE);
}

#[test]
fn extract_int_from_int_succeeds() {
    let v = IntOrDouble::Int(1);
    let got = try_extract::<i32, _>(&v);

    assert!(got.is_success());
    assert_eq!(*got.value(), 1);
}

#[test]
fn swap_success_with_failure() {
    let mut first: Expected<i32, String> = Expected::success(5);
    let mut second: Expected<i32, String> = Expected::failure("e".to_string());

    first.swap(&mut second);

    assert!(!first.is_success());
    assert_eq!(first.error(), "e");
    assert!(second.is_success());
    assert_eq!(*second.value(), 5);
}

#[test]
fn optional_view_of_failure_is_absent() {
    let result: Expected<f64, String> = Expected::failure("error occurred".to_string());
    let op_result: Option<f64> = result.into();
    assert_eq!(op_result, None);
}
