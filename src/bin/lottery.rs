//! Lifetime lottery payoff: a player buys one ticket per draw for `--draws`
//! draws and we ask what their total profit looks like.
//!
//! Prizes are drawn from an explicit tier table (jackpot down to nothing)
//! via `WeightedIndex` — the same discrete-choice construction every draw.

use rand::distr::weighted::WeightedIndex;
use rand_distr::Distribution;

use simlab::estimate::run_trials;
use simlab::stats;

/// Prize tiers below the jackpot: (amount, probability per ticket).
/// Odds loosely follow a 6-of-49 prize ladder.
const MINOR_TIERS: [(f64, f64); 3] = [
    (1_000.0, 1.0 / 55_492.0),
    (100.0, 1.0 / 1_033.0),
    (10.0, 1.0 / 57.0),
];

struct Args {
    trials: usize,
    seed: u64,
    draws: usize,
    cost: f64,
    jackpot: f64,
    odds: f64,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut trials = 50_000usize;
    let mut seed = 42u64;
    let mut draws = 2_600usize; // one ticket a week for 50 years
    let mut cost = 2.0f64;
    let mut jackpot = 5_000_000.0f64;
    let mut odds = 13_983_816.0f64;

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
            "--draws" => {
                i += 1;
                if i < args.len() {
                    draws = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --draws value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--cost" => {
                i += 1;
                if i < args.len() {
                    cost = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --cost value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--jackpot" => {
                i += 1;
                if i < args.len() {
                    jackpot = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --jackpot value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--odds" => {
                i += 1;
                if i < args.len() {
                    odds = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --odds value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--help" | "-h" => {
                println!(
                    "Usage: simlab-lottery [--trials N] [--seed S] [--draws D] [--cost C] [--jackpot J] [--odds O]"
                );
                println!();
                println!("  --trials N   Number of simulated ticket-buying lifetimes (default: 50000)");
                println!("  --seed S     RNG seed (default: 42)");
                println!("  --draws D    Tickets bought per lifetime (default: 2600)");
                println!("  --cost C     Ticket price (default: 2.0)");
                println!("  --jackpot J  Jackpot amount (default: 5000000)");
                println!("  --odds O     Jackpot odds, 1 in O (default: 13983816)");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if odds < 1.0 || cost < 0.0 || draws == 0 {
        eprintln!("Error: --odds must be >= 1, --cost >= 0, --draws >= 1");
        std::process::exit(1);
    }

    Args {
        trials,
        seed,
        draws,
        cost,
        jackpot,
        odds,
    }
}

fn main() {
    let args = parse_args();
    let num_threads = simlab::env_config::init_rayon_threads();

    // Tier table: jackpot, minor prizes, then "nothing" with the leftover mass.
    let mut amounts = vec![args.jackpot];
    let mut weights = vec![1.0 / args.odds];
    for &(amount, p) in &MINOR_TIERS {
        amounts.push(amount);
        weights.push(p);
    }
    let win_mass: f64 = weights.iter().sum();
    if win_mass >= 1.0 {
        eprintln!("Error: prize probabilities sum to {:.4} >= 1", win_mass);
        std::process::exit(1);
    }
    amounts.push(0.0);
    weights.push(1.0 - win_mass);

    let tier_index = WeightedIndex::new(&weights).unwrap_or_else(|e| {
        eprintln!("Invalid prize table: {}", e);
        std::process::exit(1);
    });

    let ev_per_ticket: f64 = amounts
        .iter()
        .zip(&weights)
        .map(|(a, w)| a * w)
        .sum::<f64>()
        - args.cost;

    println!(
        "Lottery Lifetime ({} lifetimes x {} draws, {} threads)",
        args.trials, args.draws, num_threads
    );
    println!("  Ticket cost:   {:.2}", args.cost);
    println!("  Jackpot:       {:.0} at 1 in {:.0}", args.jackpot, args.odds);
    println!("  EV per ticket: {:+.4}", ev_per_ticket);
    println!();

    let batch = run_trials(args.trials, args.seed, |rng| {
        let mut winnings = 0.0;
        for _ in 0..args.draws {
            winnings += amounts[tier_index.sample(rng)];
        }
        winnings - args.draws as f64 * args.cost
    });

    let mut sorted = batch.values.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let p_profit = stats::fraction_where(&batch.values, |v| v > 0.0);

    println!("Results (lifetime profit):");
    println!("  Mean:        {:+.2} (analytic {:+.2})",
        stats::mean(&batch.values), ev_per_ticket * args.draws as f64);
    println!("  Median:      {:+.2}", stats::percentile(&sorted, 50.0));
    println!("  p5 / p95:    {:+.2} / {:+.2}",
        stats::percentile(&sorted, 5.0), stats::percentile(&sorted, 95.0));
    println!("  P(profit>0): {:.4}", p_profit);
    println!("  Worst:       {:+.2}", sorted[0]);
    println!("  Best:        {:+.2}", sorted[sorted.len() - 1]);
    println!();
    println!("  Elapsed:     {:.1} ms", batch.elapsed.as_secs_f64() * 1000.0);
}
