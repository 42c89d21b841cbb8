pub mod generator;
mod pivot;
mod three_way;
mod two_way;

use rand::Rng;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortVariant {
    TwoWay,
    ThreeWay,
}

pub const ALL_VARIANTS: [SortVariant; 2] = [SortVariant::TwoWay, SortVariant::ThreeWay];

pub fn variant_name(variant: SortVariant) -> &'static str {
    match variant {
        SortVariant::TwoWay => "two_way",
        SortVariant::ThreeWay => "three_way",
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PivotMode {
    Deterministic,
    Randomized,
}

pub const ALL_MODES: [PivotMode; 2] = [PivotMode::Deterministic, PivotMode::Randomized];

pub fn mode_name(mode: PivotMode) -> &'static str {
    match mode {
        PivotMode::Deterministic => "deterministic",
        PivotMode::Randomized => "randomized",
    }
}

/// Comparison and swap counters accumulated over one or more sort calls.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
}

pub fn sort_u64<R: Rng + ?Sized>(
    variant: SortVariant,
    mode: PivotMode,
    data: &mut [u64],
    rng: &mut R,
) {
    let mut stats = SortStats::default();
    sort_u64_with_stats(variant, mode, data, rng, &mut stats);
}

/// Same as [`sort_u64`], accumulating element comparisons and swaps
/// into `stats`. Deterministic mode never draws from `rng`.
pub fn sort_u64_with_stats<R: Rng + ?Sized>(
    variant: SortVariant,
    mode: PivotMode,
    data: &mut [u64],
    rng: &mut R,
    stats: &mut SortStats,
) {
    match variant {
        SortVariant::TwoWay => two_way::sort(data, mode, rng, stats),
        SortVariant::ThreeWay => three_way::sort(data, mode, rng, stats),
    }
}
