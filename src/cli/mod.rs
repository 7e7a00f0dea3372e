// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the expected command-line interface.
//!
//! Two subcommands: `demo` walks through the container's behaviour on fixed
//! inputs, and `extract` builds a scalar variant from the command line and tries
//! to pull a chosen alternative out of it.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "expected",
    about = "Tagged success-or-failure container demonstrations",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print success, failure, optional-view and extraction examples
    Demo,

    /// Build a scalar variant and extract one alternative from it
    Extract {
        /// Alternative the variant holds
        #[arg(long, value_enum)]
        holds: AltKind,

        /// Payload, parsed according to --holds
        #[arg(long, allow_hyphen_values = true)]
        value: String,

        /// Alternative to extract
        #[arg(long, value_enum)]
        want: AltKind,

        /// Emit the outcome as JSON (requires the `serde_json` feature)
        #[arg(long)]
        json: bool,
    },
}

/// The alternatives of the CLI's scalar variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AltKind {
    Int,
    Double,
    Text,
}

impl AltKind {
    pub fn name(self) -> &'static str {
        match self {
            AltKind::Int => "int",
            AltKind::Double => "double",
            AltKind::Text => "text",
        }
    }
}
