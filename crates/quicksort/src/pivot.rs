use rand::Rng;

use crate::SortStats;

/// Uniformly random pivot index over the whole subrange.
#[inline]
pub(crate) fn random_index<R: Rng + ?Sized>(data: &[u64], rng: &mut R) -> usize {
    debug_assert!(!data.is_empty());
    rng.random_range(0..data.len())
}

/// Index of the median-valued element among the first, middle, and
/// last elements. Ties resolve by position, so the choice is
/// deterministic for a given input.
#[inline]
pub(crate) fn median_of_three_index(data: &[u64], stats: &mut SortStats) -> usize {
    let len = data.len();
    debug_assert!(len >= 2);

    let mid = len / 2;
    let mut triple = [(data[0], 0_usize), (data[mid], mid), (data[len - 1], len - 1)];
    triple.sort_unstable();
    stats.comparisons += 3;
    triple[1].1
}
