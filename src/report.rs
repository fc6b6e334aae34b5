//! Statistics artifacts for `--output` mode.
//!
//! Aggregates a trial-value distribution into a serializable report:
//! summary, equal-width histogram, and threshold exceedance probabilities.

use serde::Serialize;

use crate::stats::{self, Summary};

#[derive(Serialize)]
pub struct TrialStatistics {
    pub num_trials: u64,
    pub seed: u64,
    pub summary: Summary,
    pub histogram: Vec<HistogramBin>,
    /// P(value >= threshold) for each requested threshold.
    pub thresholds: Vec<ThresholdEntry>,
}

#[derive(Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: u32,
}

#[derive(Serialize)]
pub struct ThresholdEntry {
    pub threshold: f64,
    pub probability: f64,
}

/// Aggregate trial values into a report. Bins span [min, max] of the data;
/// the top edge is inclusive so the maximum lands in the last bin.
pub fn aggregate_trials(
    values: &[f64],
    seed: u64,
    num_bins: usize,
    thresholds: &[f64],
) -> Result<TrialStatistics, String> {
    if num_bins == 0 {
        return Err("histogram requires at least one bin".to_string());
    }
    let summary = Summary::from_values(values)?;

    let span = summary.max - summary.min;
    let bin_width = if span > 0.0 {
        span / num_bins as f64
    } else {
        1.0
    };
    let mut counts = vec![0u32; num_bins];
    for &v in values {
        let bin = ((v - summary.min) / bin_width) as usize;
        counts[bin.min(num_bins - 1)] += 1;
    }
    let histogram: Vec<HistogramBin> = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| HistogramBin {
            lower: summary.min + i as f64 * bin_width,
            upper: summary.min + (i + 1) as f64 * bin_width,
            count,
        })
        .collect();

    let thresholds: Vec<ThresholdEntry> = thresholds
        .iter()
        .map(|&t| ThresholdEntry {
            threshold: t,
            probability: stats::fraction_where(values, |v| v >= t),
        })
        .collect();

    Ok(TrialStatistics {
        num_trials: values.len() as u64,
        seed,
        summary,
        histogram,
        thresholds,
    })
}

/// Save aggregated statistics as pretty JSON, creating parent directories.
pub fn save_statistics(report: &TrialStatistics, path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let json = serde_json::to_string_pretty(report).expect("Failed to serialize statistics");
    std::fs::write(path, json).expect("Failed to write statistics file");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts_all_values() {
        let values: Vec<f64> = (0..1000).map(|i| i as f64 / 10.0).collect();
        let report = aggregate_trials(&values, 42, 20, &[50.0]).unwrap();
        let total: u32 = report.histogram.iter().map(|b| b.count).sum();
        assert_eq!(total, 1000);
        assert_eq!(report.histogram.len(), 20);
    }

    #[test]
    fn test_threshold_probability() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let report = aggregate_trials(&values, 42, 10, &[50.0, 1000.0]).unwrap();
        assert!((report.thresholds[0].probability - 0.5).abs() < 1e-12);
        assert_eq!(report.thresholds[1].probability, 0.0);
    }

    #[test]
    fn test_constant_values_single_bin() {
        let values = vec![7.0; 50];
        let report = aggregate_trials(&values, 42, 10, &[]).unwrap();
        let total: u32 = report.histogram.iter().map(|b| b.count).sum();
        assert_eq!(total, 50);
    }

    #[test]
    fn test_save_load_json() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let report = aggregate_trials(&values, 42, 10, &[25.0]).unwrap();
        let path = "/tmp/simlab_test_stats.json";
        save_statistics(&report, path);

        let content = std::fs::read_to_string(path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["num_trials"], 100);
        assert_eq!(parsed["histogram"].as_array().unwrap().len(), 10);

        let _ = std::fs::remove_file(path);
    }
}
