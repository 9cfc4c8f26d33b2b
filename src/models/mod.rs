//! Value types for CIDR optimization.
//!
//! - [`Family`] - IPv4/IPv6 and the bit arithmetic for each width
//! - [`Prefix`] - a single CIDR block with canonical base address
//! - [`PrefixSet`] - merged, sorted, non-redundant prefixes

mod family;
mod prefix;
mod prefix_set;

pub use family::{broadcast_addr, cut_addr, host_mask, net_mask, Family};
pub use prefix::Prefix;
pub use prefix_set::PrefixSet;
