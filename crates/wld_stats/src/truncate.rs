//! Zero-guard truncation.
//!
//! Chi-square breaks down when expected cell counts get small, so before
//! any test runs, every compared list is cut at a single shared point: the
//! first position where any sample drops below the configured minimum
//! count. The discarded tail (rare long words) is unreliable in *all*
//! samples, so it is discarded uniformly.
//!
//! Truncation is value-semantic: inputs are never mutated, callers get
//! fresh lists. A cutoff of 0 means even the first cell failed the guard
//! somewhere and the collection carries too little data to test.

use std::collections::BTreeMap;

/// Find the shared cutoff for a set of dense word-length lists.
///
/// Scans indices from 0 and advances while the index is inside the
/// shortest list's bounds and every list holds at least `threshold` at
/// that index. The shortest list's length is the maximum possible cutoff:
/// positions past it are never inspected, even when a longer list still
/// has below-threshold counts there.
pub fn zero_guard_cutoff<L>(lists: &[L], threshold: u64) -> usize
where
    L: AsRef<[u64]>,
{
    let shortest = lists.iter().map(|l| l.as_ref().len()).min().unwrap_or(0);

    let mut cutoff = 0;
    while cutoff < shortest && lists.iter().all(|l| l.as_ref()[cutoff] >= threshold) {
        cutoff += 1;
    }
    cutoff
}

/// Truncate every list in a named collection to the shared cutoff.
///
/// Every returned list has exactly `cutoff` entries, not its own natural
/// length. Returns the new collection together with the cutoff used.
pub fn zero_guard(
    samples: &BTreeMap<String, Vec<u64>>,
    threshold: u64,
) -> (BTreeMap<String, Vec<u64>>, usize) {
    let lists: Vec<&[u64]> = samples.values().map(Vec::as_slice).collect();
    let cutoff = zero_guard_cutoff(&lists, threshold);

    let truncated = samples
        .iter()
        .map(|(name, list)| (name.clone(), list[..cutoff].to_vec()))
        .collect();
    (truncated, cutoff)
}
