//! Bootstrap resampling — estimate a statistic's sampling distribution by
//! drawing B resamples of the data with replacement and recomputing the
//! statistic on each.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::stats;

/// Result of a bootstrap run.
pub struct BootstrapResult {
    /// Statistic recomputed on each resample, sorted ascending.
    pub replicates: Vec<f64>,
    /// The statistic on the original data.
    pub estimate: f64,
    /// Standard deviation of the replicates.
    pub std_error: f64,
}

impl BootstrapResult {
    /// Percentile confidence interval at the given level (e.g. 0.95).
    pub fn confidence_interval(&self, level: f64) -> (f64, f64) {
        let alpha = 1.0 - level;
        let lo = stats::percentile(&self.replicates, alpha / 2.0 * 100.0);
        let hi = stats::percentile(&self.replicates, (1.0 - alpha / 2.0) * 100.0);
        (lo, hi)
    }
}

/// Run a bootstrap: `reps` resamples of `data` (same length, with
/// replacement), recomputing `stat` on each. Replicate `i` uses an RNG
/// seeded `seed.wrapping_add(i)`.
pub fn bootstrap<F>(data: &[f64], reps: usize, seed: u64, stat: F) -> Result<BootstrapResult, String>
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    if data.is_empty() {
        return Err("bootstrap requires non-empty data".to_string());
    }
    if reps == 0 {
        return Err("bootstrap requires at least one replicate".to_string());
    }

    let estimate = stat(data);
    let n = data.len();

    let mut replicates: Vec<f64> = (0..reps)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            let resample: Vec<f64> = (0..n).map(|_| data[rng.random_range(0..n)]).collect();
            stat(&resample)
        })
        .collect();
    replicates.sort_by(|a, b| a.partial_cmp(b).expect("NaN bootstrap replicate"));

    let std_error = stats::std_dev(&replicates);

    Ok(BootstrapResult {
        replicates,
        estimate,
        std_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [f64; 10] = [4.2, 5.1, 3.8, 6.0, 5.5, 4.9, 5.2, 4.4, 5.8, 5.1];

    #[test]
    fn test_bootstrap_deterministic() {
        let a = bootstrap(&DATA, 200, 42, stats::mean).unwrap();
        let b = bootstrap(&DATA, 200, 42, stats::mean).unwrap();
        assert_eq!(a.replicates, b.replicates);
    }

    #[test]
    fn test_bootstrap_replicates_bounded_for_mean() {
        let result = bootstrap(&DATA, 500, 7, stats::mean).unwrap();
        let min = DATA.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = DATA.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        for &r in &result.replicates {
            assert!(r >= min && r <= max, "replicate {} outside data range", r);
        }
    }

    #[test]
    fn test_confidence_interval_ordered_and_contains_estimate() {
        let result = bootstrap(&DATA, 2000, 42, stats::mean).unwrap();
        let (lo, hi) = result.confidence_interval(0.95);
        assert!(lo <= hi);
        assert!(
            lo <= result.estimate && result.estimate <= hi,
            "CI [{}, {}] should cover the estimate {}",
            lo,
            hi,
            result.estimate
        );
    }

    #[test]
    fn test_bootstrap_empty_data_is_error() {
        assert!(bootstrap(&[], 100, 42, stats::mean).is_err());
    }

    #[test]
    fn test_bootstrap_zero_reps_is_error() {
        assert!(bootstrap(&DATA, 0, 42, stats::mean).is_err());
    }
}
