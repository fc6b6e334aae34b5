//! Power analysis by simulation: grow the per-group sample size until a
//! two-group z-test detects the effect often enough.
//!
//! At each candidate n, simulate many experiments (group A ~ Normal(effect, 1),
//! group B ~ Normal(0, 1)), run a Welch z-test at alpha = 0.05, and count the
//! fraction rejected. The sample size grows until that fraction reaches
//! `--target`.

use rand_distr::{Distribution, Normal};

use simlab::estimate::{estimate_proportion, grow_until};

const Z_CRIT: f64 = 1.96; // two-sided alpha = 0.05

struct Args {
    trials: usize,
    seed: u64,
    effect: f64,
    target: f64,
    start: usize,
    step: usize,
    max: usize,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut trials = 2_000usize;
    let mut seed = 42u64;
    let mut effect = 0.5f64;
    let mut target = 0.8f64;
    let mut start = 10usize;
    let mut step = 5usize;
    let mut max = 2_000usize;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--trials" => {
                i += 1;
                if i < args.len() {
                    trials = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --trials value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--effect" => {
                i += 1;
                if i < args.len() {
                    effect = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --effect value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--target" => {
                i += 1;
                if i < args.len() {
                    target = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --target value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--start" => {
                i += 1;
                if i < args.len() {
                    start = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --start value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--step" => {
                i += 1;
                if i < args.len() {
                    step = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --step value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--max" => {
                i += 1;
                if i < args.len() {
                    max = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --max value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--help" | "-h" => {
                println!(
                    "Usage: simlab-power [--trials N] [--seed S] [--effect D] [--target P] [--start N0] [--step K] [--max NMAX]"
                );
                println!();
                println!("  --trials N   Experiments simulated per candidate n (default: 2000)");
                println!("  --seed S     RNG seed (default: 42)");
                println!("  --effect D   True mean difference in SD units (default: 0.5)");
                println!("  --target P   Required power (default: 0.8)");
                println!("  --start N0   First per-group n to try (default: 10)");
                println!("  --step K     n increment (default: 5)");
                println!("  --max NMAX   Give up beyond this n (default: 2000)");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if effect == 0.0 {
        eprintln!("Error: --effect must be nonzero (power never exceeds alpha)");
        std::process::exit(1);
    }
    if !(0.0..1.0).contains(&target) {
        eprintln!("Error: --target must be in (0, 1)");
        std::process::exit(1);
    }
    if step == 0 || start < 2 {
        eprintln!("Error: --step must be >= 1 and --start >= 2 (the variance needs n-1)");
        std::process::exit(1);
    }

    Args {
        trials,
        seed,
        effect,
        target,
        start,
        step,
        max,
    }
}

/// Simulate one experiment at per-group size n; true iff the z-test rejects.
fn experiment_rejects(
    rng: &mut rand::rngs::SmallRng,
    treated: &Normal<f64>,
    control: &Normal<f64>,
    n: usize,
) -> bool {
    let a: Vec<f64> = (0..n).map(|_| treated.sample(rng)).collect();
    let b: Vec<f64> = (0..n).map(|_| control.sample(rng)).collect();
    let ma = a.iter().sum::<f64>() / n as f64;
    let mb = b.iter().sum::<f64>() / n as f64;
    let va = a.iter().map(|&v| (v - ma).powi(2)).sum::<f64>() / (n - 1) as f64;
    let vb = b.iter().map(|&v| (v - mb).powi(2)).sum::<f64>() / (n - 1) as f64;
    let z = (ma - mb) / (va / n as f64 + vb / n as f64).sqrt();
    z.abs() > Z_CRIT
}

fn main() {
    let args = parse_args();
    let num_threads = simlab::env_config::init_rayon_threads();

    let treated = Normal::new(args.effect, 1.0).expect("valid effect size");
    let control = Normal::new(0.0, 1.0).expect("valid null distribution");

    println!(
        "Power Analysis (effect d={:.2}, target {:.0}%, {} experiments per n, {} threads)",
        args.effect,
        args.target * 100.0,
        args.trials,
        num_threads
    );
    println!();
    println!("  {:>6} {:>8}", "n", "power");
    println!("  {}", "\u{2500}".repeat(15));

    let found = grow_until(args.start, args.step, args.max, args.target, |n| {
        // Per-n seed offset keeps experiments independent across candidates.
        let est = estimate_proportion(args.trials, args.seed.wrapping_add((n as u64) << 32), |rng| {
            experiment_rejects(rng, &treated, &control, n)
        });
        println!("  {:>6} {:>8.3}", n, est.p);
        est.p
    });

    println!();
    match found {
        Some((n, power)) => {
            println!(
                "Required sample size: n = {} per group (power {:.3})",
                n, power
            );
        }
        None => {
            println!(
                "Target power {:.0}% not reached by n = {} — raise --max",
                args.target * 100.0,
                args.max
            );
        }
    }
}
