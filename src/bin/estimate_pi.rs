//! Monte Carlo integration of pi: sample uniform points in the square
//! [-1,1] x [-1,1] and multiply the in-circle fraction by 4.
//!
//! Points are drawn in batches so each batch gets one RNG rather than one
//! per point; the standard error comes from the spread of batch fractions.

use rand_distr::{Distribution, Uniform};

use simlab::estimate::run_trials;
use simlab::stats;

struct Args {
    points: usize,
    batches: usize,
    seed: u64,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut points = 1_000_000usize;
    let mut batches = 1_000usize;
    let mut seed = 42u64;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--points" => {
                i += 1;
                if i < args.len() {
                    points = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --points value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--batches" => {
                i += 1;
                if i < args.len() {
                    batches = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --batches value: {}", args[i]);
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
            "--help" | "-h" => {
                println!("Usage: simlab-estimate-pi [--points N] [--batches B] [--seed S]");
                println!();
                println!("  --points N    Total points to sample (default: 1000000)");
                println!("  --batches B   Parallel batches (default: 1000)");
                println!("  --seed S      RNG seed (default: 42)");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if batches == 0 || points < batches {
        eprintln!("Error: need --batches >= 1 and --points >= --batches");
        std::process::exit(1);
    }

    Args {
        points,
        batches,
        seed,
    }
}

fn main() {
    let args = parse_args();
    let num_threads = simlab::env_config::init_rayon_threads();

    let batch_size = args.points / args.batches;
    let total = batch_size * args.batches;
    let square = Uniform::new(-1.0f64, 1.0).expect("valid uniform range");

    println!(
        "Estimating pi ({} points in {} batches, {} threads)",
        total, args.batches, num_threads
    );
    println!();

    let fractions = run_trials(args.batches, args.seed, |rng| {
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
    let std_error = 4.0 * stats::std_error(&fractions.values);
    let truth = std::f64::consts::PI;

    println!("Results:");
    println!("  Pi estimate: {:.6}", pi_estimate);
    println!("  Std error:   {:.6}", std_error);
    println!("  True pi:     {:.6}", truth);
    println!("  Abs error:   {:.6}", (pi_estimate - truth).abs());
    println!();
    println!(
        "  Elapsed:     {:.1} ms ({:.0} points/sec)",
        fractions.elapsed.as_secs_f64() * 1000.0,
        total as f64 / fractions.elapsed.as_secs_f64()
    );
}
