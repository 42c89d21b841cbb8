use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Distribution {
    Random,
    Sorted,
    Reverse,
    Equal,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 4] = [
    Distribution::Random,
    Distribution::Sorted,
    Distribution::Reverse,
    Distribution::Equal,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::Reverse => "reverse",
            Self::Equal => "equal",
        }
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("unrecognized distribution name: {0:?}")]
pub struct InvalidDistribution(pub String);

impl FromStr for Distribution {
    type Err = InvalidDistribution;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "random" => Ok(Self::Random),
            "sorted" => Ok(Self::Sorted),
            "reverse" => Ok(Self::Reverse),
            "equal" => Ok(Self::Equal),
            other => Err(InvalidDistribution(other.to_string())),
        }
    }
}

/// Builds an array of `size` elements shaped by `dist`. `Random`
/// draws uniformly from `[0, size * 10)`, so duplicates are expected.
pub fn generate<R: Rng + ?Sized>(dist: Distribution, size: usize, rng: &mut R) -> Vec<u64> {
    match dist {
        Distribution::Random => {
            let bound = (size as u64) * 10;
            (0..size).map(|_| rng.random_range(0..bound)).collect()
        }
        Distribution::Sorted => (0..size as u64).collect(),
        Distribution::Reverse => (1..=size as u64).rev().collect(),
        Distribution::Equal => vec![1; size],
    }
}

/// String-keyed entry point: unknown names are an error, never a
/// silent fallback to `Random`.
pub fn generate_named<R: Rng + ?Sized>(
    name: &str,
    size: usize,
    rng: &mut R,
) -> Result<Vec<u64>, InvalidDistribution> {
    Ok(generate(name.parse()?, size, rng))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(0xDA7A_2026)
    }

    #[test]
    fn requested_lengths() {
        let mut rng = test_rng();
        for &dist in &ALL_DISTRIBUTIONS {
            for &size in &[0_usize, 1, 7, 100, 1000] {
                assert_eq!(generate(dist, size, &mut rng).len(), size);
            }
        }
    }

    #[test]
    fn sorted_is_non_decreasing() {
        let mut rng = test_rng();
        let data = generate(Distribution::Sorted, 500, &mut rng);
        assert!(data.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(data[0], 0);
        assert_eq!(data[499], 499);
    }

    #[test]
    fn reverse_is_non_increasing() {
        let mut rng = test_rng();
        let data = generate(Distribution::Reverse, 500, &mut rng);
        assert!(data.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(data[0], 500);
        assert_eq!(data[499], 1);
    }

    #[test]
    fn equal_has_one_distinct_value() {
        let mut rng = test_rng();
        let data = generate(Distribution::Equal, 500, &mut rng);
        assert!(data.iter().all(|&v| v == 1));
    }

    #[test]
    fn random_stays_in_bounds() {
        let mut rng = test_rng();
        let data = generate(Distribution::Random, 1000, &mut rng);
        assert!(data.iter().all(|&v| v < 10_000));
    }

    #[test]
    fn labels_round_trip() {
        for &dist in &ALL_DISTRIBUTIONS {
            assert_eq!(dist.label().parse::<Distribution>(), Ok(dist));
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let mut rng = test_rng();
        let err = generate_named("gaussian", 10, &mut rng).unwrap_err();
        assert_eq!(err, InvalidDistribution("gaussian".to_string()));
        assert!("".parse::<Distribution>().is_err());
        assert!("Random".parse::<Distribution>().is_err());
    }
}
