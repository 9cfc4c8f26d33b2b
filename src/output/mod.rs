//! Output formatting for merged prefixes.
//!
//! - [`terminal`] - canonical text lines and the stderr diagnostic

mod terminal;

pub use terminal::{colorize_stderr, format, write_diagnostic, write_lines};
