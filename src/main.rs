// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use expected::{try_extract, variant, Expected, Visit};

mod cli;
use cli::display::{self, BOLD, DIM, GREEN, RED};
use cli::{AltKind, Cli, Commands};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

variant! {
    #[derive(Debug, Clone, PartialEq)]
    enum Scalar {
        Int(i64),
        Double(f64),
        Text(String),
        Pt(Point),
    }
}

/// Renders a scalar the way the demo prints it.
struct Describe;

impl Visit<i64> for Describe {
    type Output = String;
    fn visit(&mut self, value: &i64) -> String {
        format!("int:{}", value)
    }
}

impl Visit<f64> for Describe {
    type Output = String;
    fn visit(&mut self, value: &f64) -> String {
        format!("double:{}", value)
    }
}

impl Visit<String> for Describe {
    type Output = String;
    fn visit(&mut self, value: &String) -> String {
        format!("std::string:{}", value)
    }
}

impl Visit<Point> for Describe {
    type Output = String;
    fn visit(&mut self, value: &Point) -> String {
        format!("Point: {{{},{}}}", value.x, value.y)
    }
}

#[derive(Serialize)]
struct ExtractReport<'a> {
    holds: &'static str,
    want: &'static str,
    result: &'a Expected<String, String>,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Demo => {
            run_demo();
            Ok(())
        }
        Commands::Extract {
            holds,
            value,
            want,
            json,
        } => run_extract(holds, &value, want, json),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber with environment filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// ============================================================================
// DEMO
// ============================================================================

fn run_demo() {
    info!("running demo");
    let colors = display::use_colors();

    let result: Expected<f64, String> = Expected::success(1.0);
    print_report(&render_result("result", &result, colors));

    let result1: Expected<f64, String> = Expected::failure("error occurred".to_string());
    print_report(&render_result("result1", &result1, colors));

    let op_result: Option<f64> = result1.into();
    println!(
        "{} {}",
        display::paint(colors, &[DIM], "op_result:"),
        op_result.map_or_else(|| "none".to_string(), |v| v.to_string())
    );

    let a = Scalar::Int(1);
    let get_result = try_extract::<f64, _>(&a);
    print_report(&render_result("get_result", &get_result, colors));

    for scalar in [
        Scalar::Int(1),
        Scalar::Double(1.0),
        Scalar::Text("aa".to_string()),
        Scalar::Pt(Point { x: 1, y: 2 }),
    ] {
        println!("{}", scalar.visit(&mut Describe));
    }
}

/// The two lines printed for a named result.
fn render_result<T: Display, E: Display>(
    name: &str,
    result: &Expected<T, E>,
    colors: bool,
) -> [String; 2] {
    if bool::from(result) {
        [
            format!("{} {}", name, display::paint(colors, &[GREEN, BOLD], "succeed")),
            format!("{} {}", display::paint(colors, &[DIM], "val:"), result.value()),
        ]
    } else {
        [
            format!("{} {}", name, display::paint(colors, &[RED, BOLD], "error")),
            format!("{} {}", display::paint(colors, &[DIM], "err:"), result.error()),
        ]
    }
}

fn print_report(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

// ============================================================================
// EXTRACT
// ============================================================================

fn run_extract(holds: AltKind, raw: &str, want: AltKind, json: bool) -> Result<(), String> {
    let scalar = parse_scalar(holds, raw).into_result()?;
    debug!(?scalar, want = want.name(), "extracting alternative");

    let result = extract_as_text(&scalar, want);
    info!(success = result.is_success(), "extraction finished");

    if json {
        let report = ExtractReport {
            holds: holds.name(),
            want: want.name(),
            result: &result,
        };
        println!("{}", to_json(&report)?);
    } else {
        print_report(&render_result("extract", &result, display::use_colors()));
    }
    Ok(())
}

/// Parse a raw argument into the requested alternative.
///
/// A value that does not parse is a failure of the parse, reported as a CLI
/// error; it never reaches `try_extract`.
fn parse_scalar(kind: AltKind, raw: &str) -> Expected<Scalar, String> {
    match kind {
        AltKind::Int => raw
            .parse::<i64>()
            .map(Scalar::Int)
            .map_err(|e| format!("invalid int '{}': {}", raw, e))
            .into(),
        AltKind::Double => raw
            .parse::<f64>()
            .map(Scalar::Double)
            .map_err(|e| format!("invalid double '{}': {}", raw, e))
            .into(),
        AltKind::Text => Expected::success(Scalar::Text(raw.to_string())),
    }
}

fn extract_as_text(scalar: &Scalar, want: AltKind) -> Expected<String, String> {
    match want {
        AltKind::Int => try_extract::<i64, _>(scalar).map(|v| v.to_string()),
        AltKind::Double => try_extract::<f64, _>(scalar).map(|v| v.to_string()),
        AltKind::Text => try_extract::<String, _>(scalar),
    }
}

#[cfg(feature = "serde_json")]
fn to_json<S: Serialize>(value: &S) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("failed to encode JSON: {}", e))
}

#[cfg(not(feature = "serde_json"))]
fn to_json<S: Serialize>(_value: &S) -> Result<String, String> {
    Err("built without the serde_json feature; --json is unavailable".to_string())
}
