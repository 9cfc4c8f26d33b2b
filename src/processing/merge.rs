//! CIDR aggregation.
//!
//! Reduces any list of prefixes to the smallest set of blocks covering
//! exactly the same addresses. Families are merged independently.

use crate::error::CidrError;
use crate::models::{cut_addr, Family, Prefix, PrefixSet};
use itertools::Itertools;

/// Merge `prefixes` into a minimal, sorted [`PrefixSet`].
///
/// Duplicates collapse, blocks inside a broader block are dropped and
/// sibling blocks are combined into their parent, transitively.
///
/// # Examples
/// ```
/// use cidr_optimizer::models::Prefix;
/// use cidr_optimizer::processing::merge;
///
/// let nets: Vec<Prefix> = vec!["10.0.0.0/24".parse().unwrap(), "10.0.1.0/24".parse().unwrap()];
/// let merged = merge(nets).unwrap();
/// assert_eq!(merged.as_slice()[0].to_string(), "10.0.0.0/23");
/// ```
pub fn merge<I>(prefixes: I) -> Result<PrefixSet, CidrError>
where
    I: IntoIterator<Item = Prefix>,
{
    let (v4, v6): (Vec<Prefix>, Vec<Prefix>) = prefixes
        .into_iter()
        .partition(|p| p.family() == Family::V4);
    log::debug!("merge: {} IPv4 and {} IPv6 prefixes", v4.len(), v6.len());

    let mut merged = merge_family(v4);
    merged.extend(merge_family(v6));

    check_merged(&merged)?;
    log::debug!("merge: {} prefixes after aggregation", merged.len());
    Ok(PrefixSet::from_sorted(merged))
}

/// Aggregate prefixes of a single family.
fn merge_family(mut nets: Vec<Prefix>) -> Vec<Prefix> {
    if nets.len() < 2 {
        return nets;
    }
    // Base address ascending, broader block first on ties.
    nets.sort_unstable();
    let disjoint = drop_contained(nets);
    merge_siblings(disjoint)
}

/// Drop every prefix that lies inside an earlier accepted one.
///
/// Input must be sorted. CIDR blocks are either nested or disjoint, so only
/// the most recently accepted block needs checking.
fn drop_contained(sorted: Vec<Prefix>) -> Vec<Prefix> {
    let mut accepted: Vec<Prefix> = Vec::with_capacity(sorted.len());
    for net in sorted {
        match accepted.last() {
            Some(last) if last.contains(&net) => {
                log::trace!("drop {net}: inside {last}");
            }
            _ => accepted.push(net),
        }
    }
    accepted
}

/// Combine sibling pairs into their parent until nothing more merges.
///
/// Input must be sorted and disjoint. A freshly merged parent is retried
/// against the block below it on the stack, so chains like
/// `/26 + /26 -> /25`, `/25 + /25 -> /24` collapse in one sweep.
fn merge_siblings(disjoint: Vec<Prefix>) -> Vec<Prefix> {
    let mut stack: Vec<Prefix> = Vec::with_capacity(disjoint.len());
    for net in disjoint {
        stack.push(net);
        while stack.len() >= 2 {
            let upper = stack[stack.len() - 1];
            let lower = stack[stack.len() - 2];
            let parent = match lower.parent() {
                Some(parent) if lower.is_sibling_of(&upper) => parent,
                _ => break,
            };
            log::trace!("merge {lower} + {upper} -> {parent}");
            stack.truncate(stack.len() - 2);
            stack.push(parent);
        }
    }
    stack
}

/// Verify the merged list is canonical, sorted, disjoint and not further
/// mergeable.
fn check_merged(merged: &[Prefix]) -> Result<(), CidrError> {
    if let Some(bad) = merged
        .iter()
        .find(|p| cut_addr(p.family(), p.addr(), p.prefix_len()) != p.addr())
    {
        return Err(CidrError::Merge(format!("{bad:?} has host bits set")));
    }
    for (a, b) in merged.iter().tuple_windows() {
        if a >= b {
            return Err(CidrError::Merge(format!("{a} not ordered before {b}")));
        }
        if a.family() != b.family() {
            continue;
        }
        if a.hi() >= b.lo() {
            return Err(CidrError::Merge(format!("{a} overlaps {b}")));
        }
        if a.is_sibling_of(b) {
            return Err(CidrError::Merge(format!("{a} and {b} left unmerged")));
        }
    }
    Ok(())
}
