//! Descriptive statistics over simulation outputs.
//!
//! All aggregation is f64. Variance is the population variance (divide by
//! n), matching what the exercises report; the standard error of a sample
//! mean is `std_dev / sqrt(n)`.

use serde::Serialize;

/// Arithmetic mean. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divide by n). Returns 0.0 for empty input.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|&v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Standard error of the sample mean: `std_dev / sqrt(n)`.
pub fn std_error(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    std_dev(values) / (values.len() as f64).sqrt()
}

/// Nearest-rank percentile on an already-sorted slice. `p` in [0, 100].
/// The rank is clamped to the last index, so p=100 returns the maximum.
///
/// Panics on an empty slice — callers hold at least one trial value.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    let idx = ((p / 100.0) * (sorted.len() - 1) as f64).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

/// Fraction of values satisfying a predicate.
pub fn fraction_where<F>(values: &[f64], pred: F) -> f64
where
    F: Fn(f64) -> bool,
{
    if values.is_empty() {
        return 0.0;
    }
    values.iter().filter(|&&v| pred(v)).count() as f64 / values.len() as f64
}

/// One-pass summary of a trial distribution.
#[derive(Clone, Debug, Serialize)]
pub struct Summary {
    pub n: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub std_error: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub p5: f64,
    pub p25: f64,
    pub p75: f64,
    pub p95: f64,
}

impl Summary {
    /// Compute a full summary. Sorts a copy of `values`.
    pub fn from_values(values: &[f64]) -> Result<Summary, String> {
        if values.is_empty() {
            return Err("cannot summarize an empty value set".to_string());
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).expect("NaN in trial values"));

        Ok(Summary {
            n: sorted.len(),
            mean: mean(&sorted),
            std_dev: std_dev(&sorted),
            std_error: std_error(&sorted),
            min: sorted[0],
            max: *sorted.last().unwrap(),
            median: percentile(&sorted, 50.0),
            p5: percentile(&sorted, 5.0),
            p25: percentile(&sorted, 25.0),
            p75: percentile(&sorted, 75.0),
            p95: percentile(&sorted, 95.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_variance() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&v) - 5.0).abs() < 1e-12);
        assert!((variance(&v) - 4.0).abs() < 1e-12);
        assert!((std_dev(&v) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_bounds() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile(&v, 0.0), 1.0);
        assert_eq!(percentile(&v, 50.0), 3.0);
        assert_eq!(percentile(&v, 100.0), 5.0);
    }

    #[test]
    fn test_fraction_where() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert!((fraction_where(&v, |x| x > 2.0) - 0.5).abs() < 1e-12);
        assert_eq!(fraction_where(&[], |x| x > 0.0), 0.0);
    }

    #[test]
    fn test_summary_ordering() {
        let v: Vec<f64> = (1..=100).map(|i| i as f64).collect();
        let s = Summary::from_values(&v).unwrap();
        assert_eq!(s.n, 100);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 100.0);
        assert!(s.p5 <= s.p25);
        assert!(s.p25 <= s.median);
        assert!(s.median <= s.p75);
        assert!(s.p75 <= s.p95);
        assert!((s.mean - 50.5).abs() < 1e-12);
    }

    #[test]
    fn test_summary_empty_is_error() {
        assert!(Summary::from_values(&[]).is_err());
    }

    #[test]
    fn test_summary_single_value() {
        let s = Summary::from_values(&[3.5]).unwrap();
        assert_eq!(s.min, 3.5);
        assert_eq!(s.max, 3.5);
        assert_eq!(s.median, 3.5);
        assert_eq!(s.std_dev, 0.0);
    }
}
