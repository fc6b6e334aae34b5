//! Jackknife resampling — leave one observation out at a time to estimate a
//! statistic's bias and standard error.

use crate::stats;

/// Result of a jackknife run.
pub struct JackknifeResult {
    /// The statistic on the full sample.
    pub estimate: f64,
    /// Jackknife bias estimate: `(n-1) * (mean(replicates) - estimate)`.
    pub bias: f64,
    /// Jackknife standard error: `sqrt((n-1)/n * Σ(r_i - r̄)²)`.
    pub std_error: f64,
    /// Leave-one-out replicates, in leave-out order.
    pub replicates: Vec<f64>,
}

impl JackknifeResult {
    /// Bias-corrected estimate.
    pub fn corrected(&self) -> f64 {
        self.estimate - self.bias
    }
}

/// Run a jackknife: recompute `stat` on each of the n leave-one-out
/// subsamples. Requires n >= 2.
pub fn jackknife<F>(data: &[f64], stat: F) -> Result<JackknifeResult, String>
where
    F: Fn(&[f64]) -> f64,
{
    let n = data.len();
    if n < 2 {
        return Err(format!("jackknife requires at least 2 observations, got {}", n));
    }

    let estimate = stat(data);

    let mut loo = Vec::with_capacity(n - 1);
    let replicates: Vec<f64> = (0..n)
        .map(|i| {
            loo.clear();
            loo.extend_from_slice(&data[..i]);
            loo.extend_from_slice(&data[i + 1..]);
            stat(&loo)
        })
        .collect();

    let rep_mean = stats::mean(&replicates);
    let bias = (n - 1) as f64 * (rep_mean - estimate);
    let ss: f64 = replicates.iter().map(|&r| (r - rep_mean).powi(2)).sum();
    let std_error = ((n - 1) as f64 / n as f64 * ss).sqrt();

    Ok(JackknifeResult {
        estimate,
        bias,
        std_error,
        replicates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [f64; 8] = [9.8, 10.2, 10.0, 9.9, 10.1, 10.3, 9.7, 10.0];

    #[test]
    fn test_jackknife_mean_is_unbiased() {
        // The sample mean is unbiased, so the jackknife bias of the mean is
        // exactly zero up to float error.
        let result = jackknife(&DATA, stats::mean).unwrap();
        assert!((result.bias).abs() < 1e-12, "bias={}", result.bias);
        assert!((result.estimate - stats::mean(&DATA)).abs() < 1e-12);
    }

    #[test]
    fn test_jackknife_mean_matches_closed_form() {
        // For the mean, the jackknife SE equals s / sqrt(n) with the
        // unbiased sample standard deviation s.
        let result = jackknife(&DATA, stats::mean).unwrap();
        let n = DATA.len() as f64;
        let m = stats::mean(&DATA);
        let s2: f64 = DATA.iter().map(|&v| (v - m).powi(2)).sum::<f64>() / (n - 1.0);
        let expected_se = (s2 / n).sqrt();
        assert!(
            (result.std_error - expected_se).abs() < 1e-12,
            "jackknife SE {} vs closed form {}",
            result.std_error,
            expected_se
        );
    }

    #[test]
    fn test_jackknife_replicate_count() {
        let result = jackknife(&DATA, stats::mean).unwrap();
        assert_eq!(result.replicates.len(), DATA.len());
    }

    #[test]
    fn test_jackknife_too_small_is_error() {
        assert!(jackknife(&[1.0], stats::mean).is_err());
        assert!(jackknife(&[], stats::mean).is_err());
    }
}
