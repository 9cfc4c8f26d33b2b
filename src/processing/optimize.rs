//! Top-level optimization with the dedup fallback.
//!
//! If any line fails to parse, or aggregation fails its own checks, the
//! whole batch degrades to the raw lines de-duplicated and sorted as plain
//! strings. There is no per-line recovery.

use super::merge::merge;
use crate::error::CidrError;
use crate::models::{Prefix, PrefixSet};
use crate::output::format;
use itertools::Itertools;

/// Result lines plus the diagnostic to report when the fallback ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optimized {
    /// Lines for the primary output, in output order.
    pub lines: Vec<String>,
    /// Set only when CIDR merging was abandoned.
    pub diagnostic: Option<String>,
}

impl Optimized {
    pub fn is_fallback(&self) -> bool {
        self.diagnostic.is_some()
    }
}

fn clean<'a, S: AsRef<str>>(lines: &'a [S]) -> impl Iterator<Item = &'a str> + 'a {
    lines.iter().map(|l| l.as_ref().trim()).filter(|l| !l.is_empty())
}

/// Parse every line and merge. Fails on the first line that is not a CIDR.
pub fn optimize<S: AsRef<str>>(lines: &[S]) -> Result<PrefixSet, CidrError> {
    let prefixes = clean(lines)
        .map(str::parse::<Prefix>)
        .collect::<Result<Vec<Prefix>, CidrError>>()?;
    log::debug!("parsed {} prefixes", prefixes.len());
    merge(prefixes)
}

/// Raw lines de-duplicated and sorted lexicographically, no CIDR handling.
pub fn dedup_sorted<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    clean(lines).sorted().dedup().map(str::to_string).collect()
}

/// Run [`optimize`] and format the result, or fall back to [`dedup_sorted`].
///
/// # Examples
/// ```
/// use cidr_optimizer::processing::optimize_or_fallback;
///
/// let out = optimize_or_fallback(&["10.0.0.0/24", "10.0.1.0/24"]);
/// assert_eq!(out.lines, vec!["10.0.0.0/23"]);
/// assert!(out.diagnostic.is_none());
///
/// let out = optimize_or_fallback(&["not-a-cidr", "10.0.0.0/24"]);
/// assert_eq!(out.lines, vec!["10.0.0.0/24", "not-a-cidr"]);
/// assert!(out.is_fallback());
/// ```
pub fn optimize_or_fallback<S: AsRef<str>>(lines: &[S]) -> Optimized {
    match optimize(lines) {
        Ok(set) => Optimized {
            lines: format(&set),
            diagnostic: None,
        },
        Err(e) => {
            log::debug!("falling back to plain de-duplication: {e}");
            Optimized {
                lines: dedup_sorted(lines),
                diagnostic: Some(format!("Error processing CIDRs: {e}")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimize_ignores_blank_and_whitespace() {
        let set = optimize(&["  10.0.0.0/24 ", "", "\t10.0.1.0/24\r", "   "]).unwrap();
        assert_eq!(format(&set), vec!["10.0.0.0/23"]);
    }

    #[test]
    fn test_optimize_reports_first_bad_line() {
        let err = optimize(&["10.0.0.0/8", "bogus", "also-bogus"]).unwrap_err();
        match err {
            CidrError::Parse { input, .. } => assert_eq!(input, "bogus"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_dedup_sorted() {
        assert_eq!(
            dedup_sorted(&["b", "a", " b ", "", "10.0.0.0/8"]),
            vec!["10.0.0.0/8", "a", "b"]
        );
    }

    #[test]
    fn test_fallback_is_all_or_nothing() {
        // 10.0.0.0/24 and 10.0.1.0/24 would merge, but one bad line disables merging
        let out = optimize_or_fallback(&["10.0.1.0/24", "oops", "10.0.0.0/24", "10.0.1.0/24"]);
        assert_eq!(out.lines, vec!["10.0.0.0/24", "10.0.1.0/24", "oops"]);
        let diag = out.diagnostic.unwrap();
        assert!(diag.starts_with("Error processing CIDRs: "), "{diag}");
        assert!(diag.contains("oops"), "{diag}");
    }

    #[test]
    fn test_fallback_keeps_raw_text() {
        // host bits are not cleared on the fallback path
        let out = optimize_or_fallback(&["10.0.0.5/24", "10.0.0.0/33"]);
        assert_eq!(out.lines, vec!["10.0.0.0/33", "10.0.0.5/24"]);
        assert!(out.is_fallback());
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        let out = optimize_or_fallback(&empty);
        assert!(out.lines.is_empty());
        assert!(!out.is_fallback());
    }

    #[test]
    fn test_mixed_families() {
        let out = optimize_or_fallback(&["2001:db8::/33", "10.0.0.0/8", "2001:db8:8000::/33"]);
        assert_eq!(out.lines, vec!["10.0.0.0/8", "2001:db8::/32"]);
    }
}
