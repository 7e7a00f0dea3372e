// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the expected CLI.
//!
//! Green for a success, red for a failure, dim for labels. Respects `NO_COLOR`
//! and falls back to plain text when stdout is not a TTY, so piped output stays
//! clean.

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
}

pub use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if enabled, otherwise return plain text
pub fn paint(enabled: bool, styles: &[&str], text: &str) -> String {
    if enabled {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_disabled_is_plain() {
        assert_eq!(paint(false, &[GREEN, BOLD], "succeed"), "succeed");
    }

    #[test]
    fn test_paint_enabled_wraps_and_resets() {
        assert_eq!(paint(true, &[RED], "error"), "\x1b[31merror\x1b[0m");
    }

    #[test]
    fn test_paint_joins_styles_in_order() {
        assert_eq!(paint(true, &[BOLD, DIM], "x"), "\x1b[1m\x1b[2mx\x1b[0m");
    }
}
