//! Construction, clone, move and drop discipline.

use super::common::{make_expected, snapshot, DropCounter};
use expected::{AccessError, Expected};

#[test]
fn clone_is_independent_of_source() {
    let mut original: Expected<Vec<i32>, String> = Expected::success(vec![1, 2]);
    let copy = original.clone();

    original.value_mut().push(3);

    assert_eq!(copy.value(), &vec![1, 2]);
    assert_eq!(original.value(), &vec![1, 2, 3]);
}

#[test]
fn move_transfers_ownership_once() {
    let drops = DropCounter::new();
    {
        let source: Expected<_, String> = Expected::success(drops.track(9));
        let destination = source;
        assert_eq!(destination.value().get(), 9);
    }
    assert_eq!(drops.count(), 1);
}

#[test]
fn take_then_drop_both() {
    let drops = DropCounter::new();
    {
        let mut source: Expected<Vec<_>, String> = Expected::success(vec![drops.track(1)]);
        let moved = source.take();
        assert_eq!(moved.value().len(), 1);
        assert!(source.value().is_empty());
    }
    assert_eq!(drops.count(), 1);
}

#[test]
fn failure_payload_dropped_on_swap_path() {
    let drops = DropCounter::new();
    {
        let mut a: Expected<i32, _> = Expected::failure(drops.track(1));
        let mut b: Expected<i32, _> = Expected::success(2);
        a.swap(&mut b);
        assert_eq!(b.error().get(), 1);
        assert_eq!(drops.count(), 0);
    }
    assert_eq!(drops.count(), 1);
}

#[test]
fn std_mem_swap_matches_method() {
    let mut a = make_expected(true, 1, "a");
    let mut b = make_expected(false, 2, "b");
    let (mut c, mut d) = (a.clone(), b.clone());

    a.swap(&mut b);
    std::mem::swap(&mut c, &mut d);

    assert_eq!(snapshot(&a), snapshot(&c));
    assert_eq!(snapshot(&b), snapshot(&d));
}

#[test]
fn try_accessors_report_misuse() {
    let ok = make_expected(true, 1, "unused");
    let bad = make_expected(false, 1, "bad");

    assert_eq!(ok.try_value(), Ok(&1));
    assert_eq!(ok.try_error(), Err(AccessError::NoErrorPresent));
    assert_eq!(bad.try_value(), Err(AccessError::MissingValue));
    assert_eq!(bad.try_error().map(String::as_str), Ok("bad"));
}

#[test]
#[should_panic(expected = "missing value")]
fn into_value_of_failure_panics() {
    make_expected(false, 0, "bad").into_value();
}

#[test]
#[should_panic(expected = "no error present")]
fn into_error_of_success_panics() {
    make_expected(true, 0, "").into_error();
}

#[test]
fn default_is_default_success() {
    let d: Expected<u32, String> = Expected::default();
    assert_eq!(d.try_value(), Ok(&0));
}
