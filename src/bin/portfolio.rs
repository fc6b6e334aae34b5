//! Portfolio fan chart: compound a Normal annual return over many years.

use std::fs;
use std::io::Write;

use rand_distr::{Distribution, Normal};
use rayon::prelude::*;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use simlab::estimate::run_trials;
use simlab::stats;

struct Args {
    trials: usize,
    seed: u64,
    initial: f64,
    mu: f64,
    sigma: f64,
    years: usize,
    output: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut trials = 100_000usize;
    let mut seed = 42u64;
    let mut initial = 10_000.0f64;
    let mut mu = 0.07f64;
    let mut sigma = 0.15f64;
    let mut years = 30usize;
    let mut output: Option<String> = None;

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
            "--initial" => {
                i += 1;
                if i < args.len() {
                    initial = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --initial value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--mu" => {
                i += 1;
                if i < args.len() {
                    mu = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --mu value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--sigma" => {
                i += 1;
                if i < args.len() {
                    sigma = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --sigma value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--years" => {
                i += 1;
                if i < args.len() {
                    years = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --years value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!(
                    "Usage: simlab-portfolio [--trials N] [--seed S] [--initial B] [--mu M] [--sigma V] [--years Y] [--output DIR]"
                );
                println!();
                println!("  --trials N    Number of simulated futures (default: 100000)");
                println!("  --seed S      RNG seed (default: 42)");
                println!("  --initial B   Starting balance (default: 10000)");
                println!("  --mu M        Mean annual return (default: 0.07)");
                println!("  --sigma V     Annual return std dev (default: 0.15)");
                println!("  --years Y     Years to compound (default: 30)");
                println!("  --output DIR  Write per-year percentile fan CSV to DIR");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if years == 0 || initial <= 0.0 {
        eprintln!("Error: need --years >= 1 and --initial > 0");
        std::process::exit(1);
    }

    Args {
        trials,
        seed,
        initial,
        mu,
        sigma,
        years,
        output,
    }
}

fn main() {
    let _base = simlab::env_config::init_base_path();
    let args = parse_args();
    let num_threads = simlab::env_config::init_rayon_threads();

    let returns = Normal::new(args.mu, args.sigma).unwrap_or_else(|e| {
        eprintln!("Invalid return distribution: {}", e);
        std::process::exit(1);
    });

    println!(
        "Portfolio Futures ({} trials x {} years, {} threads)",
        args.trials, args.years, num_threads
    );
    println!(
        "  Annual return: Normal({:.3}, {:.3}), starting balance {:.0}",
        args.mu, args.sigma, args.initial
    );
    println!();

    let batch = run_trials(args.trials, args.seed, |rng| {
        let mut balance = args.initial;
        for _ in 0..args.years {
            // A year cannot lose more than everything.
            balance *= (1.0 + returns.sample(rng)).max(0.0);
        }
        balance
    });

    let summary = batch.summary().unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    let p_loss = stats::fraction_where(&batch.values, |v| v < args.initial);
    let analytic_mean = args.initial * (1.0 + args.mu).powi(args.years as i32);

    println!("Results (ending balance):");
    println!(
        "  Mean:        {:.0} (analytic {:.0})",
        summary.mean, analytic_mean
    );
    println!("  Median:      {:.0}", summary.median);
    println!("  p5 / p95:    {:.0} / {:.0}", summary.p5, summary.p95);
    println!("  P(loss):     {:.4} (ending below {:.0})", p_loss, args.initial);
    println!("  Min / Max:   {:.0} / {:.0}", summary.min, summary.max);
    println!();
    println!("  Elapsed:     {:.1} ms", batch.elapsed.as_secs_f64() * 1000.0);

    // Percentile fan: rerun with the same seeds, recording the whole path.
    if let Some(ref output_dir) = args.output {
        let paths: Vec<Vec<f64>> = (0..args.trials)
            .into_par_iter()
            .map(|i| {
                let mut rng = SmallRng::seed_from_u64(args.seed.wrapping_add(i as u64));
                let mut balance = args.initial;
                let mut path = Vec::with_capacity(args.years);
                for _ in 0..args.years {
                    balance *= (1.0 + returns.sample(&mut rng)).max(0.0);
                    path.push(balance);
                }
                path
            })
            .collect();

        fs::create_dir_all(output_dir).unwrap_or_else(|e| {
            eprintln!("Failed to create output directory: {}", e);
            std::process::exit(1);
        });
        let csv_path = format!("{}/portfolio_fan.csv", output_dir);
        let mut f = std::io::BufWriter::new(fs::File::create(&csv_path).unwrap());
        writeln!(f, "year,p5,p25,p50,p75,p95").unwrap();
        for year in 0..args.years {
            let mut column: Vec<f64> = paths.iter().map(|p| p[year]).collect();
            column.sort_by(|a, b| a.partial_cmp(b).unwrap());
            writeln!(
                f,
                "{},{:.2},{:.2},{:.2},{:.2},{:.2}",
                year + 1,
                stats::percentile(&column, 5.0),
                stats::percentile(&column, 25.0),
                stats::percentile(&column, 50.0),
                stats::percentile(&column, 75.0),
                stats::percentile(&column, 95.0),
            )
            .unwrap();
        }
        drop(f);
        println!("  Wrote {}", csv_path);
    }
}
