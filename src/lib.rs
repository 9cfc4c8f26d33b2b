//! Minimal CIDR set computation.
//!
//! Takes arbitrary, possibly overlapping or duplicated IPv4/IPv6 prefixes and
//! produces the smallest set of CIDR blocks covering exactly the same
//! addresses:
//! - [`models`] - [`Prefix`](models::Prefix), [`PrefixSet`](models::PrefixSet)
//! - [`processing`] - merge and the dedup fallback
//! - [`input`] / [`output`] - line-oriented text in and out

pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use std::io::{Read, Write};

pub use error::CidrError;
pub use models::{Family, Prefix, PrefixSet};
pub use processing::{merge, optimize, optimize_or_fallback, Optimized};

/// Read CIDRs from `input`, write the optimized list to `out` and, if the
/// fallback ran, the diagnostic to `err`.
///
/// Only I/O failures are returned as errors; bad input degrades to the
/// de-duplicated raw lines.
pub fn run<R: Read, O: Write, E: Write>(
    input: R,
    out: &mut O,
    err: &mut E,
) -> Result<Optimized, CidrError> {
    let lines = input::read_cidr_lines(input)?;
    let optimized = optimize_or_fallback(lines.as_slice());
    if let Some(diagnostic) = &optimized.diagnostic {
        log::debug!("fallback used for {} lines", lines.len());
        output::write_diagnostic(err, diagnostic)?;
    }
    output::write_lines(out, optimized.lines.as_slice())?;
    Ok(optimized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_merges() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let res = run("10.0.1.0/24\n10.0.0.0/24\n".as_bytes(), &mut out, &mut err).unwrap();
        assert!(!res.is_fallback());
        assert_eq!(String::from_utf8(out).unwrap(), "10.0.0.0/23\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_fallback_writes_diagnostic_to_err_only() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let res = run("not-a-cidr\n10.0.0.0/24\n".as_bytes(), &mut out, &mut err).unwrap();
        assert!(res.is_fallback());
        assert_eq!(String::from_utf8(out).unwrap(), "10.0.0.0/24\nnot-a-cidr\n");
        let err = String::from_utf8(err).unwrap();
        assert_eq!(err.lines().count(), 1);
        assert!(err.contains("Error processing CIDRs"));
    }

    #[test]
    fn test_run_empty() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        run("".as_bytes(), &mut out, &mut err).unwrap();
        assert!(out.is_empty());
        assert!(err.is_empty());
    }
}
