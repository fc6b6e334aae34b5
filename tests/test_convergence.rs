//! Seeded convergence checks: the sample statistics the exercises print
//! should land near their analytic values at these trial counts. Tolerances
//! are several standard errors wide, and every test uses a fixed seed.

use rand_distr::{Binomial, Distribution, Normal, Poisson, Uniform};

use simlab::datasets::{DONATIONS_A, WRENCH_LENGTHS};
use simlab::estimate::{estimate_proportion, run_trials};
use simlab::resample::{bootstrap, jackknife, permutation_test};
use simlab::stats;

#[test]
fn poisson_sample_mean_approaches_lambda() {
    let lambda = 4.0;
    let dist = Poisson::new(lambda).unwrap();
    let batch = run_trials(100_000, 11, |rng| dist.sample(rng));
    let mean = stats::mean(&batch.values);
    // SE = sqrt(lambda / n) ~ 0.0063
    assert!((mean - lambda).abs() < 0.05, "mean={}", mean);
}

#[test]
fn binomial_sample_mean_approaches_np() {
    let dist = Binomial::new(1_000, 0.3).unwrap();
    let batch = run_trials(20_000, 12, |rng| dist.sample(rng) as f64);
    let mean = stats::mean(&batch.values);
    assert!((mean - 300.0).abs() < 1.0, "mean={}", mean);
}

#[test]
fn normal_sample_std_dev_approaches_sigma() {
    let dist = Normal::new(0.0, 1.0).unwrap();
    let batch = run_trials(100_000, 13, |rng| dist.sample(rng));
    let sd = stats::std_dev(&batch.values);
    assert!((sd - 1.0).abs() < 0.02, "sd={}", sd);
}

#[test]
fn uniform_p90_approaches_point_nine() {
    let dist = Uniform::new(0.0f64, 1.0).unwrap();
    let batch = run_trials(100_000, 14, |rng| dist.sample(rng));
    let mut sorted = batch.values;
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let p90 = stats::percentile(&sorted, 90.0);
    assert!((p90 - 0.9).abs() < 0.01, "p90={}", p90);
}

#[test]
fn pi_estimate_converges() {
    // 1000 batches x 1000 points: SE of the estimate ~ 0.0016.
    let batch_size = 1_000;
    let square = Uniform::new(-1.0f64, 1.0).unwrap();
    let fractions = run_trials(1_000, 15, |rng| {
        let mut in_circle = 0usize;
        for _ in 0..batch_size {
            let x = square.sample(rng);
            let y = square.sample(rng);
            if x * x + y * y <= 1.0 {
                in_circle += 1;
            }
        }
        in_circle as f64 / batch_size as f64
    });
    let pi_estimate = 4.0 * stats::mean(&fractions.values);
    assert!(
        (pi_estimate - std::f64::consts::PI).abs() < 0.01,
        "pi={}",
        pi_estimate
    );
}

#[test]
fn proportion_estimate_matches_event_probability() {
    // P(two dice sum to 7) = 1/6.
    let est = estimate_proportion(200_000, 16, |rng| {
        use rand::Rng;
        let a: u32 = rng.random_range(1..=6);
        let b: u32 = rng.random_range(1..=6);
        a + b == 7
    });
    assert!((est.p - 1.0 / 6.0).abs() < 0.005, "p={}", est.p);
}

#[test]
fn bootstrap_se_of_mean_matches_closed_form() {
    // The bootstrap SE of the mean estimates sigma_hat / sqrt(n).
    let n = WRENCH_LENGTHS.len() as f64;
    let expected = stats::std_dev(&WRENCH_LENGTHS) / n.sqrt();
    let result = bootstrap(&WRENCH_LENGTHS, 20_000, 17, stats::mean).unwrap();
    assert!(
        (result.std_error - expected).abs() / expected < 0.1,
        "bootstrap SE {} vs closed form {}",
        result.std_error,
        expected
    );
}

#[test]
fn bootstrap_and_jackknife_se_agree() {
    let boot = bootstrap(&WRENCH_LENGTHS, 20_000, 18, stats::mean).unwrap();
    let jack = jackknife(&WRENCH_LENGTHS, stats::mean).unwrap();
    assert!(
        (boot.std_error - jack.std_error).abs() / jack.std_error < 0.15,
        "bootstrap {} vs jackknife {}",
        boot.std_error,
        jack.std_error
    );
}

#[test]
fn permutation_test_on_identical_groups_is_insignificant() {
    let result = permutation_test(&DONATIONS_A, &DONATIONS_A, 5_000, 19, stats::mean).unwrap();
    assert_eq!(result.observed, 0.0);
    assert!(result.p_two_sided > 0.99, "p={}", result.p_two_sided);
}

#[test]
fn trial_batches_are_reproducible() {
    let dist = Normal::new(5.0, 2.0).unwrap();
    let a = run_trials(10_000, 20, |rng| dist.sample(rng));
    let b = run_trials(10_000, 20, |rng| dist.sample(rng));
    assert_eq!(a.values, b.values);

    let pa = estimate_proportion(10_000, 20, |rng| dist.sample(rng) > 5.0);
    let pb = estimate_proportion(10_000, 20, |rng| dist.sample(rng) > 5.0);
    assert_eq!(pa.hits, pb.hits);
}
