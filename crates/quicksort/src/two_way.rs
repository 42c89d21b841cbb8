use rand::Rng;

use crate::{PivotMode, SortStats, pivot};

pub(crate) fn sort<R: Rng + ?Sized>(
    data: &mut [u64],
    mode: PivotMode,
    rng: &mut R,
    stats: &mut SortStats,
) {
    quick_sort(data, mode, rng, stats);
}

fn quick_sort<R: Rng + ?Sized>(
    mut data: &mut [u64],
    mode: PivotMode,
    rng: &mut R,
    stats: &mut SortStats,
) {
    // Recurse into the smaller side, loop on the larger, so stack
    // depth stays O(log n) even when partitions degenerate.
    while data.len() > 1 {
        let last = data.len() - 1;
        if let PivotMode::Randomized = mode {
            let idx = pivot::random_index(data, rng);
            data.swap(idx, last);
            stats.swaps += 1;
        }

        let split = partition_lomuto(data, stats);
        let (left, rest) = data.split_at_mut(split);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort(left, mode, rng, stats);
            data = right;
        } else {
            quick_sort(right, mode, rng, stats);
            data = left;
        }
    }
}

/// Lomuto partition around the last element. Returns the pivot's
/// final index; everything before it is `<=` the pivot, everything
/// after is `>` it.
fn partition_lomuto(data: &mut [u64], stats: &mut SortStats) -> usize {
    let last = data.len() - 1;
    let pivot = data[last];
    let mut i = 0;

    for j in 0..last {
        stats.comparisons += 1;
        if data[j] <= pivot {
            data.swap(i, j);
            stats.swaps += 1;
            i += 1;
        }
    }

    data.swap(i, last);
    stats.swaps += 1;
    i
}
