//! Ad-funnel revenue model: impressions -> clicks -> conversions -> revenue.
//!
//! Clicks are Binomial over impressions, conversions Binomial over clicks,
//! and each conversion's order value is LogNormal. The question is whether
//! the campaign covers its spend, and how fat the downside tail is.

use rand_distr::{Binomial, Distribution, LogNormal};

use simlab::estimate::run_trials;
use simlab::report;
use simlab::stats;

struct Args {
    trials: usize,
    seed: u64,
    impressions: u64,
    ctr: f64,
    cvr: f64,
    spend: f64,
    output: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut trials = 50_000usize;
    let mut seed = 42u64;
    let mut impressions = 100_000u64;
    let mut ctr = 0.02f64;
    let mut cvr = 0.05f64;
    let mut spend = 5_000.0f64;
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
            "--impressions" => {
                i += 1;
                if i < args.len() {
                    impressions = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --impressions value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--ctr" => {
                i += 1;
                if i < args.len() {
                    ctr = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --ctr value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--cvr" => {
                i += 1;
                if i < args.len() {
                    cvr = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --cvr value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--spend" => {
                i += 1;
                if i < args.len() {
                    spend = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --spend value: {}", args[i]);
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
                    "Usage: simlab-ad-funnel [--trials N] [--seed S] [--impressions I] [--ctr C] [--cvr V] [--spend B] [--output DIR]"
                );
                println!();
                println!("  --trials N        Campaigns simulated (default: 50000)");
                println!("  --seed S          RNG seed (default: 42)");
                println!("  --impressions I   Impressions bought per campaign (default: 100000)");
                println!("  --ctr C           Click-through rate (default: 0.02)");
                println!("  --cvr V           Click-to-order conversion rate (default: 0.05)");
                println!("  --spend B         Campaign spend / break-even line (default: 5000)");
                println!("  --output DIR      Write revenue_statistics.json to DIR");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if !(0.0..=1.0).contains(&ctr) || !(0.0..=1.0).contains(&cvr) {
        eprintln!("Error: --ctr and --cvr must be in [0, 1]");
        std::process::exit(1);
    }

    Args {
        trials,
        seed,
        impressions,
        ctr,
        cvr,
        spend,
        output,
    }
}

fn main() {
    let _base = simlab::env_config::init_base_path();
    let args = parse_args();
    let num_threads = simlab::env_config::init_rayon_threads();

    let clicks_dist = Binomial::new(args.impressions, args.ctr).unwrap_or_else(|e| {
        eprintln!("Invalid click distribution: {}", e);
        std::process::exit(1);
    });
    // Median order value ~$60, right-skewed.
    let order_value = LogNormal::new(60.0f64.ln(), 0.5).expect("valid order-value parameters");

    let analytic_orders = args.impressions as f64 * args.ctr * args.cvr;

    println!(
        "Ad Funnel ({} campaigns, {} threads)",
        args.trials, num_threads
    );
    println!(
        "  Funnel:      {} impressions x {:.3} CTR x {:.3} CVR = {:.0} expected orders",
        args.impressions, args.ctr, args.cvr, analytic_orders
    );
    println!("  Spend:       {:.0}", args.spend);
    println!();

    let batch = run_trials(args.trials, args.seed, |rng| {
        let clicks = clicks_dist.sample(rng);
        let orders = Binomial::new(clicks, args.cvr)
            .expect("cvr validated at startup")
            .sample(rng);
        (0..orders).map(|_| order_value.sample(rng)).sum::<f64>()
    });

    let summary = batch.summary().unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    let p_break_even = stats::fraction_where(&batch.values, |v| v >= args.spend);

    println!("Results (campaign revenue):");
    println!("  Mean:          {:.0}", summary.mean);
    println!("  Median:        {:.0}", summary.median);
    println!("  p5 / p95:      {:.0} / {:.0}", summary.p5, summary.p95);
    println!("  P(>= spend):   {:.4}", p_break_even);
    println!("  Mean ROAS:     {:.2}x", summary.mean / args.spend);
    println!();
    println!("  Elapsed:       {:.1} ms", batch.elapsed.as_secs_f64() * 1000.0);

    if let Some(ref output_dir) = args.output {
        let thresholds = [args.spend, 1.5 * args.spend, 2.0 * args.spend];
        let report = report::aggregate_trials(&batch.values, args.seed, 40, &thresholds)
            .unwrap_or_else(|e| {
                eprintln!("{}", e);
                std::process::exit(1);
            });
        let path = format!("{}/revenue_statistics.json", output_dir);
        report::save_statistics(&report, &path);
        println!("  Statistics:    {}", path);
    }
}
