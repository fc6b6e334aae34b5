//! Property-based tests for statistics and resampling invariants.

use proptest::prelude::*;

use simlab::resample::{bootstrap, jackknife, permutation_test};
use simlab::stats::{self, Summary};

/// Strategy: a non-empty vector of finite values.
fn values_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e6..1e6f64, 1..50)
}

/// Strategy: a vector large enough for leave-one-out resampling.
fn resample_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e6..1e6f64, 2..40)
}

proptest! {
    // 1. Percentile is monotone in p on sorted data
    #[test]
    fn percentile_monotone(values in values_strategy(), p1 in 0.0..=100.0, p2 in 0.0..=100.0) {
        let mut sorted = values;
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let (lo, hi) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
        prop_assert!(stats::percentile(&sorted, lo) <= stats::percentile(&sorted, hi));
    }

    // 2. Summary ordering: min <= p5 <= median <= p95 <= max, mean within range
    #[test]
    fn summary_ordered(values in values_strategy()) {
        let s = Summary::from_values(&values).unwrap();
        prop_assert!(s.min <= s.p5);
        prop_assert!(s.p5 <= s.median);
        prop_assert!(s.median <= s.p95);
        prop_assert!(s.p95 <= s.max);
        prop_assert!(s.mean >= s.min && s.mean <= s.max);
        prop_assert!(s.std_dev >= 0.0);
    }

    // 3. Count fractions live in [0, 1]
    #[test]
    fn fraction_in_unit_interval(values in values_strategy(), cut in -1e6..1e6f64) {
        let f = stats::fraction_where(&values, |v| v > cut);
        prop_assert!((0.0..=1.0).contains(&f));
    }

    // 4. Bootstrap replicates of the mean stay inside the data's range
    #[test]
    fn bootstrap_mean_bounded(values in resample_strategy(), seed in any::<u64>()) {
        let result = bootstrap(&values, 50, seed, stats::mean).unwrap();
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        for &r in &result.replicates {
            prop_assert!(r >= min - 1e-9 && r <= max + 1e-9);
        }
        prop_assert!(result.std_error >= 0.0);
    }

    // 5. Jackknife of the mean reproduces the mean and has ~zero bias
    #[test]
    fn jackknife_mean_unbiased(values in resample_strategy()) {
        let result = jackknife(&values, stats::mean).unwrap();
        let scale = 1.0 + stats::mean(&values).abs();
        prop_assert!((result.estimate - stats::mean(&values)).abs() / scale < 1e-9);
        prop_assert!(result.bias.abs() / scale < 1e-5);
    }

    // 6. Permutation p-values are valid probabilities and never zero
    #[test]
    fn permutation_p_valid(
        a in resample_strategy(),
        b in resample_strategy(),
        seed in any::<u64>(),
    ) {
        let result = permutation_test(&a, &b, 50, seed, stats::mean).unwrap();
        prop_assert!(result.p_one_sided > 0.0 && result.p_one_sided <= 1.0);
        prop_assert!(result.p_two_sided > 0.0 && result.p_two_sided <= 1.0);
        prop_assert_eq!(result.null_distribution.len(), 50);
    }
}
