//! Permutation test — shuffle group labels to build the null distribution of
//! a two-group statistic difference.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

/// Result of a permutation test.
pub struct PermutationResult {
    /// `stat(a) - stat(b)` on the original labels.
    pub observed: f64,
    /// Statistic differences under shuffled labels, one per permutation.
    pub null_distribution: Vec<f64>,
    /// P(null >= observed), with the +1 correction.
    pub p_one_sided: f64,
    /// P(|null| >= |observed|), with the +1 correction.
    pub p_two_sided: f64,
}

/// Run a permutation test on two groups. Each permutation shuffles the
/// pooled data and splits it at the original group-A size; permutation `i`
/// uses an RNG seeded `seed.wrapping_add(i)`.
///
/// P-values use the `(count + 1) / (reps + 1)` correction so they are never
/// exactly zero.
pub fn permutation_test<F>(
    group_a: &[f64],
    group_b: &[f64],
    reps: usize,
    seed: u64,
    stat: F,
) -> Result<PermutationResult, String>
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    if group_a.is_empty() || group_b.is_empty() {
        return Err("permutation test requires two non-empty groups".to_string());
    }
    if reps == 0 {
        return Err("permutation test requires at least one permutation".to_string());
    }

    let observed = stat(group_a) - stat(group_b);
    let n_a = group_a.len();

    let mut pooled = Vec::with_capacity(group_a.len() + group_b.len());
    pooled.extend_from_slice(group_a);
    pooled.extend_from_slice(group_b);

    let null_distribution: Vec<f64> = (0..reps)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            let mut shuffled = pooled.clone();
            shuffled.shuffle(&mut rng);
            stat(&shuffled[..n_a]) - stat(&shuffled[n_a..])
        })
        .collect();

    let count_ge = null_distribution.iter().filter(|&&d| d >= observed).count();
    let count_abs = null_distribution
        .iter()
        .filter(|&&d| d.abs() >= observed.abs())
        .count();

    Ok(PermutationResult {
        observed,
        null_distribution,
        p_one_sided: (count_ge + 1) as f64 / (reps + 1) as f64,
        p_two_sided: (count_abs + 1) as f64 / (reps + 1) as f64,
    })
}
