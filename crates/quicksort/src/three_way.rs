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
    while data.len() > 1 {
        let last = data.len() - 1;
        let idx = match mode {
            PivotMode::Deterministic => pivot::median_of_three_index(data, stats),
            PivotMode::Randomized => pivot::random_index(data, rng),
        };
        data.swap(idx, last);
        stats.swaps += 1;

        // The equal run [lt, gt) is already in final position; only
        // the strict sides need more work.
        let (lt, gt) = partition_dutch_flag(data, stats);
        let (left, rest) = data.split_at_mut(lt);
        let right = &mut rest[gt - lt..];

        if left.len() < right.len() {
            quick_sort(left, mode, rng, stats);
            data = right;
        } else {
            quick_sort(right, mode, rng, stats);
            data = left;
        }
    }
}

/// Dutch-national-flag partition around the value sitting in the last
/// slot. Returns `(lt, gt)`: `[0, lt)` holds values below the pivot,
/// `[lt, gt)` values equal to it, `[gt, len)` values above it.
fn partition_dutch_flag(data: &mut [u64], stats: &mut SortStats) -> (usize, usize) {
    let pivot = data[data.len() - 1];
    let mut lt = 0;
    let mut i = 0;
    let mut gt = data.len();

    while i < gt {
        let v = data[i];
        stats.comparisons += 1;
        if v < pivot {
            data.swap(i, lt);
            stats.swaps += 1;
            lt += 1;
            i += 1;
        } else {
            stats.comparisons += 1;
            if v > pivot {
                gt -= 1;
                data.swap(i, gt);
                stats.swaps += 1;
            } else {
                i += 1;
            }
        }
    }

    (lt, gt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_segments() {
        let mut data = vec![4, 8, 4, 1, 9, 4];
        let mut stats = SortStats::default();
        let (lt, gt) = partition_dutch_flag(&mut data, &mut stats);

        assert!(data[..lt].iter().all(|&v| v < 4));
        assert!(data[lt..gt].iter().all(|&v| v == 4));
        assert!(data[gt..].iter().all(|&v| v > 4));
        assert_eq!(gt - lt, 3);
    }

    #[test]
    fn partition_all_equal_is_one_pass() {
        let mut data = vec![6; 64];
        let mut stats = SortStats::default();
        let (lt, gt) = partition_dutch_flag(&mut data, &mut stats);

        assert_eq!((lt, gt), (0, 64));
        assert_eq!(stats.comparisons, 128);
        assert_eq!(stats.swaps, 0);
    }
}
