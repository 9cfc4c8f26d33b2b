//! Terminal output.
//!
//! Result lines go to the primary writer (stdout); the fallback diagnostic
//! goes to the error writer (stderr) and never mixes with results.

use crate::models::PrefixSet;
use colored::Colorize;
use std::io::{self, Write};

/// Render each prefix as canonical `address/len` text, in set order.
pub fn format(set: &PrefixSet) -> Vec<String> {
    set.iter().map(|p| p.to_string()).collect()
}

/// Write one line per entry. Nothing is written for an empty slice.
pub fn write_lines<W: Write, S: AsRef<str>>(out: &mut W, lines: &[S]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    out.flush()
}

/// Whether diagnostics should be coloured: only for a terminal on stderr,
/// and never when `NO_COLOR` is set.
pub fn colorize_stderr(stderr_is_terminal: bool, no_color: bool) -> bool {
    stderr_is_terminal && !no_color
}

/// Write the single fallback diagnostic line.
pub fn write_diagnostic<W: Write>(err: &mut W, message: &str) -> io::Result<()> {
    writeln!(err, "{} {}", "warning:".yellow().bold(), message)?;
    err.flush()
}
