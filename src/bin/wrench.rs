//! Bootstrap and jackknife the mean wrench length from one production run.

use simlab::datasets::WRENCH_LENGTHS;
use simlab::resample::{bootstrap, jackknife};
use simlab::stats;

struct Args {
    reps: usize,
    seed: u64,
    level: f64,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut reps = 10_000usize;
    let mut seed = 42u64;
    let mut level = 0.95f64;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--reps" => {
                i += 1;
                if i < args.len() {
                    reps = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --reps value: {}", args[i]);
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
            "--level" => {
                i += 1;
                if i < args.len() {
                    level = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --level value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--help" | "-h" => {
                println!("Usage: simlab-wrench [--reps B] [--seed S] [--level L]");
                println!();
                println!("  --reps B    Bootstrap resamples (default: 10000)");
                println!("  --seed S    RNG seed (default: 42)");
                println!("  --level L   Confidence level (default: 0.95)");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if !(0.0..1.0).contains(&level) {
        eprintln!("Error: --level must be in (0, 1)");
        std::process::exit(1);
    }

    Args { reps, seed, level }
}

fn main() {
    let args = parse_args();
    let num_threads = simlab::env_config::init_rayon_threads();

    let data = &WRENCH_LENGTHS;
    println!(
        "Wrench Lengths ({} measurements, {} bootstrap reps, {} threads)",
        data.len(),
        args.reps,
        num_threads
    );
    println!(
        "  Sample mean: {:.4} cm (sd {:.4})",
        stats::mean(data),
        stats::std_dev(data)
    );
    println!();

    let boot = bootstrap(data, args.reps, args.seed, stats::mean).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    let (lo, hi) = boot.confidence_interval(args.level);

    println!("Bootstrap (mean):");
    println!("  Std error:   {:.4}", boot.std_error);
    println!(
        "  {:.0}% CI:      [{:.4}, {:.4}]",
        args.level * 100.0,
        lo,
        hi
    );
    println!();

    let jack = jackknife(data, stats::mean).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    println!("Jackknife (mean):");
    println!("  Bias:        {:+.6}", jack.bias);
    println!("  Std error:   {:.4}", jack.std_error);
    println!("  Corrected:   {:.4}", jack.corrected());
}
