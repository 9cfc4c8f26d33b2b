//! CIDR processing logic.
//!
//! - [`merge`] - aggregation of prefixes into a minimal set
//! - [`optimize`] - parse, merge and the all-or-nothing dedup fallback

mod merge;
mod optimize;

pub use merge::merge;
pub use optimize::{dedup_sorted, optimize, optimize_or_fallback, Optimized};
