//! Corn-farm planting sweep: find the acreage that maximizes mean profit.
//!
//! The farm is a newsvendor in disguise: planted acres yield a random
//! harvest (Normal yield per acre, Poisson storm losses), but demand is also
//! random — bushels beyond demand only fetch salvage price. Planting too
//! little leaves margin on the table; planting too much grows corn that
//! sells below cost. The sweep runs a Monte Carlo batch per grid point and
//! reads off mean and percentile profit, the same way a policy sweep scans
//! a parameter grid.
//!
//! Output: per-acreage table on stdout, optional `corn_farm_sweep.csv`.

use std::fs;
use std::io::Write;

use rand_distr::{Distribution, Normal, Poisson};

use simlab::estimate::run_trials;
use simlab::stats;

const SELL_PRICE: f64 = 5.0; // $/bushel sold against demand
const SALVAGE_PRICE: f64 = 1.5; // $/bushel beyond demand
const COST_PER_ACRE: f64 = 600.0;
const YIELD_MEAN: f64 = 150.0; // bushels/acre
const YIELD_SD: f64 = 25.0;
const DEMAND_MEAN: f64 = 18_000.0; // bushels
const DEMAND_SD: f64 = 4_000.0;
const STORM_RATE: f64 = 1.2; // storms per season
const STORM_LOSS: f64 = 0.95; // harvest fraction kept per storm

struct Args {
    trials: usize,
    seed: u64,
    min_acres: usize,
    max_acres: usize,
    step: usize,
    output: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut trials = 20_000usize;
    let mut seed = 42u64;
    let mut min_acres = 40usize;
    let mut max_acres = 240usize;
    let mut step = 20usize;
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
            "--min-acres" => {
                i += 1;
                if i < args.len() {
                    min_acres = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --min-acres value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--max-acres" => {
                i += 1;
                if i < args.len() {
                    max_acres = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --max-acres value: {}", args[i]);
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
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!(
                    "Usage: simlab-corn-farm [--trials N] [--seed S] [--min-acres A] [--max-acres B] [--step K] [--output DIR]"
                );
                println!();
                println!("  --trials N     Seasons simulated per acreage (default: 20000)");
                println!("  --seed S       RNG seed (default: 42)");
                println!("  --min-acres A  Smallest acreage in the sweep (default: 40)");
                println!("  --max-acres B  Largest acreage in the sweep (default: 240)");
                println!("  --step K       Acreage grid step (default: 20)");
                println!("  --output DIR   Write corn_farm_sweep.csv to DIR");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if step == 0 || min_acres == 0 || max_acres < min_acres {
        eprintln!("Error: need --step >= 1 and 1 <= --min-acres <= --max-acres");
        std::process::exit(1);
    }

    Args {
        trials,
        seed,
        min_acres,
        max_acres,
        step,
        output,
    }
}

struct SweepRow {
    acres: usize,
    mean: f64,
    std_dev: f64,
    p5: f64,
    p50: f64,
    p95: f64,
}

fn main() {
    let _base = simlab::env_config::init_base_path();
    let args = parse_args();
    let num_threads = simlab::env_config::init_rayon_threads();

    let yield_dist = Normal::new(YIELD_MEAN, YIELD_SD).expect("valid yield parameters");
    let demand_dist = Normal::new(DEMAND_MEAN, DEMAND_SD).expect("valid demand parameters");
    let storm_dist = Poisson::new(STORM_RATE).expect("valid storm rate");

    println!(
        "Corn Farm Sweep ({}..{} acres step {}, {} seasons each, {} threads)",
        args.min_acres, args.max_acres, args.step, args.trials, num_threads
    );
    println!();
    println!(
        "  {:>6} {:>10} {:>9} {:>10} {:>10} {:>10}",
        "acres", "mean", "std", "p5", "p50", "p95"
    );
    println!("  {}", "\u{2500}".repeat(60));

    let mut rows: Vec<SweepRow> = Vec::new();
    let mut acres = args.min_acres;
    while acres <= args.max_acres {
        // Offset the seed per grid point so seasons are independent across acreages.
        let point_seed = args.seed.wrapping_add((acres as u64) << 32);
        let batch = run_trials(args.trials, point_seed, |rng| {
            let per_acre = yield_dist.sample(rng).max(0.0);
            let storms = storm_dist.sample(rng) as i32;
            let harvest = acres as f64 * per_acre * STORM_LOSS.powi(storms);
            let demand = demand_dist.sample(rng).max(0.0);
            let sold = harvest.min(demand);
            let excess = (harvest - demand).max(0.0);
            sold * SELL_PRICE + excess * SALVAGE_PRICE - acres as f64 * COST_PER_ACRE
        });

        let mut sorted = batch.values.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let row = SweepRow {
            acres,
            mean: stats::mean(&batch.values),
            std_dev: stats::std_dev(&batch.values),
            p5: stats::percentile(&sorted, 5.0),
            p50: stats::percentile(&sorted, 50.0),
            p95: stats::percentile(&sorted, 95.0),
        };
        println!(
            "  {:>6} {:>10.0} {:>9.0} {:>10.0} {:>10.0} {:>10.0}",
            row.acres, row.mean, row.std_dev, row.p5, row.p50, row.p95
        );
        rows.push(row);
        acres += args.step;
    }

    let best = rows
        .iter()
        .max_by(|a, b| a.mean.partial_cmp(&b.mean).unwrap())
        .unwrap();
    println!();
    println!(
        "Best planting: {} acres (mean profit {:.0}, p5 {:.0})",
        best.acres, best.mean, best.p5
    );

    if let Some(ref output_dir) = args.output {
        fs::create_dir_all(output_dir).unwrap_or_else(|e| {
            eprintln!("Failed to create output directory: {}", e);
            std::process::exit(1);
        });
        let path = format!("{}/corn_farm_sweep.csv", output_dir);
        let mut f = std::io::BufWriter::new(fs::File::create(&path).unwrap());
        writeln!(f, "acres,trials,mean,std,p5,p50,p95").unwrap();
        for r in &rows {
            writeln!(
                f,
                "{},{},{:.2},{:.2},{:.2},{:.2},{:.2}",
                r.acres, args.trials, r.mean, r.std_dev, r.p5, r.p50, r.p95
            )
            .unwrap();
        }
        drop(f);
        println!("  Wrote {}", path);
    }
}
