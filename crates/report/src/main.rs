mod plot;

use std::collections::BTreeMap;
use std::error::Error;
use std::hint::black_box;
use std::time::Instant;

use quicksort::generator::{self, ALL_DISTRIBUTIONS, Distribution};
use quicksort::{ALL_VARIANTS, PivotMode, SortVariant, sort_u64, variant_name};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SIZES: [usize; 3] = [100, 500, 1000];
const TRIALS: usize = 10;
const RNG_SEED: u64 = 0x5EED_2026;

/// Average elapsed seconds per sort, one value per pivot mode.
#[derive(Clone, Copy, Debug, Default)]
struct TimingPair {
    deterministic: f64,
    randomized: f64,
}

type ResultsTable = BTreeMap<(usize, Distribution), TimingPair>;

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(RNG_SEED);

    let mut three_way = ResultsTable::new();
    for &variant in &ALL_VARIANTS {
        println!("=== {} quicksort ===", variant_name(variant));
        let table = run_variant(variant, &mut rng);
        println!();
        if variant == SortVariant::ThreeWay {
            three_way = table;
        }
    }

    // Charts compare the three-way variant's pivot modes, whose
    // deterministic rule is median-of-three.
    for &dist in &ALL_DISTRIBUTIONS {
        let det: Vec<f64> = SIZES.iter().map(|&s| three_way[&(s, dist)].deterministic).collect();
        let rnd: Vec<f64> = SIZES.iter().map(|&s| three_way[&(s, dist)].randomized).collect();
        let path = format!("{}_plot.png", dist.label());
        plot::render_distribution_chart(dist, &SIZES, &det, &rnd, &path)?;
        println!("wrote {path}");
    }

    Ok(())
}

fn run_variant(variant: SortVariant, rng: &mut StdRng) -> ResultsTable {
    let mut results = ResultsTable::new();

    for &size in &SIZES {
        println!("--- array size: {size} ---");
        for &dist in &ALL_DISTRIBUTIONS {
            let pair = match dist {
                Distribution::Random => time_fresh_arrays(variant, size, rng),
                _ => time_repeated_trials(variant, dist, size, rng),
            };
            println!(
                "{:<8} | deterministic: {:.6}s | randomized: {:.6}s",
                dist.label(),
                pair.deterministic,
                pair.randomized,
            );
            results.insert((size, dist), pair);
        }
    }

    results
}

/// Random inputs vary trial to trial, so each trial draws a fresh
/// array; averaging over one sample would bias the result.
fn time_fresh_arrays(variant: SortVariant, size: usize, rng: &mut StdRng) -> TimingPair {
    let mut pair = TimingPair::default();
    for _ in 0..TRIALS {
        let base = generator::generate(Distribution::Random, size, rng);
        pair.deterministic += time_one(variant, PivotMode::Deterministic, &base, rng);
        pair.randomized += time_one(variant, PivotMode::Randomized, &base, rng);
    }
    average(pair)
}

/// Fixed-shape inputs are identical across trials; one generated
/// array is re-cloned per timed run.
fn time_repeated_trials(
    variant: SortVariant,
    dist: Distribution,
    size: usize,
    rng: &mut StdRng,
) -> TimingPair {
    let base = generator::generate(dist, size, rng);
    let mut pair = TimingPair::default();
    for _ in 0..TRIALS {
        pair.deterministic += time_one(variant, PivotMode::Deterministic, &base, rng);
        pair.randomized += time_one(variant, PivotMode::Randomized, &base, rng);
    }
    average(pair)
}

fn time_one(variant: SortVariant, mode: PivotMode, base: &[u64], rng: &mut StdRng) -> f64 {
    let mut data = base.to_vec();
    let start = Instant::now();
    sort_u64(variant, mode, &mut data, rng);
    let elapsed = start.elapsed().as_secs_f64();
    black_box(&data);
    elapsed
}

fn average(pair: TimingPair) -> TimingPair {
    TimingPair {
        deterministic: pair.deterministic / TRIALS as f64,
        randomized: pair.randomized / TRIALS as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_every_size_and_distribution() {
        let mut rng = StdRng::seed_from_u64(0x7E57_2026);
        for &variant in &ALL_VARIANTS {
            let table = run_variant(variant, &mut rng);
            assert_eq!(table.len(), SIZES.len() * ALL_DISTRIBUTIONS.len());
            for pair in table.values() {
                assert!(pair.deterministic >= 0.0);
                assert!(pair.randomized >= 0.0);
            }
        }
    }
}
