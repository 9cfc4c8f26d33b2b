//! Aggregated, canonically ordered set of prefixes.

use super::{Family, Prefix};
use std::net::IpAddr;

/// Output of [`crate::processing::merge`]: sorted by family, base address and
/// length, with no entry overlapping, containing or mergeable with another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixSet {
    prefixes: Vec<Prefix>,
}

impl PrefixSet {
    /// Caller guarantees `prefixes` already satisfies the set invariants.
    pub(crate) fn from_sorted(prefixes: Vec<Prefix>) -> PrefixSet {
        PrefixSet { prefixes }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Prefix> {
        self.prefixes.iter()
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// True when `ip` falls inside one of the blocks.
    pub fn covers(&self, ip: &IpAddr) -> bool {
        // Entries are disjoint and sorted, so only the last block starting
        // at or below `ip` can hold it.
        let host = match Prefix::from_ip(*ip, Family::of(ip).max_len()) {
            Ok(h) => h,
            Err(_) => return false,
        };
        let idx = self.prefixes.partition_point(|p| *p <= host);
        idx > 0 && self.prefixes[idx - 1].contains_ip(ip)
    }

    pub fn as_slice(&self) -> &[Prefix] {
        &self.prefixes
    }

    pub fn into_vec(self) -> Vec<Prefix> {
        self.prefixes
    }
}

impl<'a> IntoIterator for &'a PrefixSet {
    type Item = &'a Prefix;
    type IntoIter = std::slice::Iter<'a, Prefix>;

    fn into_iter(self) -> Self::IntoIter {
        self.prefixes.iter()
    }
}
