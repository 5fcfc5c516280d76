// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Message formatting.
//!
//! Turns an argument list into a single newline-terminated line:
//! - exactly one value → its text followed by `\n`
//! - zero or several values → texts joined by one space, then `\n`

use std::fmt::Display;

/// Marker written in front of every debug message.
pub const DEBUG_PREFIX: &str = "===(debug)===> ";

/// Format values into one newline-terminated message.
pub fn format(values: &[&dyn Display]) -> String {
    if let [value] = values {
        return format!("{value}\n");
    }

    let mut line = values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    line.push('\n');
    line
}

/// Format values as a debug message: [`DEBUG_PREFIX`] followed by [`format`].
pub fn format_debug(values: &[&dyn Display]) -> String {
    let mut line = String::from(DEBUG_PREFIX);
    line.push_str(&format(values));
    line
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
