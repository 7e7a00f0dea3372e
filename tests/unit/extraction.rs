//! Extraction and visitation over user-declared variants.

use expected::{try_extract, variant, Alternative, Expected, Visit, MISSING_ALTERNATIVE};

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

variant! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum Value {
        Int(i64),
        Double(f64),
        Text(String),
        Pt(Point),
    }
}

/// Counts how many of each alternative it has seen.
#[derive(Default)]
struct Tally {
    ints: usize,
    doubles: usize,
    texts: usize,
    points: usize,
}

impl Visit<i64> for Tally {
    type Output = ();
    fn visit(&mut self, _: &i64) {
        self.ints += 1;
    }
}

impl Visit<f64> for Tally {
    type Output = ();
    fn visit(&mut self, _: &f64) {
        self.doubles += 1;
    }
}

impl Visit<String> for Tally {
    type Output = ();
    fn visit(&mut self, _: &String) {
        self.texts += 1;
    }
}

impl Visit<Point> for Tally {
    type Output = ();
    fn visit(&mut self, _: &Point) {
        self.points += 1;
    }
}

fn sample() -> Vec<Value> {
    vec![
        Value::Int(1),
        Value::Double(1.0),
        Value::Text("aa".to_string()),
        Value::Pt(Point { x: 1.0, y: 2.0 }),
        Value::Int(2),
    ]
}

#[test]
fn each_alternative_extracts_only_itself() {
    for v in sample() {
        let hits = [
            try_extract::<i64, _>(&v).is_success(),
            try_extract::<f64, _>(&v).is_success(),
            try_extract::<String, _>(&v).is_success(),
            try_extract::<Point, _>(&v).is_success(),
        ];
        assert_eq!(hits.iter().filter(|hit| **hit).count(), 1, "{:?}", v);
    }
}

#[test]
fn misses_carry_the_fixed_message() {
    let got: Expected<Point, String> = try_extract(&Value::Text("x".to_string()));
    assert_eq!(got.error(), MISSING_ALTERNATIVE);
}

#[test]
fn extracted_point_equals_payload() {
    let v = Value::Pt(Point { x: 1.0, y: 2.0 });
    assert_eq!(*try_extract::<Point, _>(&v).value(), Point { x: 1.0, y: 2.0 });
}

#[test]
fn get_if_borrows_without_copy() {
    let v = Value::Text("borrowed".to_string());
    let text: Option<&String> = v.get_if();
    assert_eq!(text.map(String::as_str), Some("borrowed"));
}

#[test]
fn tally_visits_every_alternative() {
    let mut tally = Tally::default();
    for v in sample() {
        v.visit(&mut tally);
    }
    assert_eq!(
        (tally.ints, tally.doubles, tally.texts, tally.points),
        (2, 1, 1, 1)
    );
}

#[test]
fn extraction_chains_with_combinators() {
    let doubled = try_extract::<i64, _>(&Value::Int(21)).map(|n| n * 2);
    assert_eq!(doubled.value_or(0), 42);

    let missing = try_extract::<i64, _>(&Value::Double(0.5)).map(|n| n * 2);
    assert_eq!(missing.value_or(0), 0);
}
