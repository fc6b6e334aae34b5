//! Dice duel: two players score points off the same pair of dice.
//!
//! Each round rolls two dice. Doubles score a point for player A; otherwise
//! a sum of 9 or more scores for player B. First to `--rounds` points wins.
//! P(doubles) = 6/36 while P(sum >= 9, no doubles) = 8/36, so B carries a
//! small edge per round that compounds over the game.

use rand::rngs::SmallRng;
use rand::Rng;

use simlab::estimate::{estimate_proportion, run_trials};

struct Args {
    trials: usize,
    seed: u64,
    rounds: u32,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut trials = 100_000usize;
    let mut seed = 42u64;
    let mut rounds = 5u32;

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
            "--rounds" => {
                i += 1;
                if i < args.len() {
                    rounds = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --rounds value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--help" | "-h" => {
                println!("Usage: simlab-dice [--trials N] [--seed S] [--rounds R]");
                println!();
                println!("  --trials N   Number of games to simulate (default: 100000)");
                println!("  --seed S     RNG seed (default: 42)");
                println!("  --rounds R   Points needed to win a game (default: 5)");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Usage: simlab-dice [--trials N] [--seed S] [--rounds R]");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if rounds == 0 {
        eprintln!("Error: --rounds must be at least 1");
        std::process::exit(1);
    }

    Args {
        trials,
        seed,
        rounds,
    }
}

/// Play one game to `target` points. Returns (A won, rounds played).
fn play_game(rng: &mut SmallRng, target: u32) -> (bool, u32) {
    let mut a = 0u32;
    let mut b = 0u32;
    let mut played = 0u32;
    loop {
        let d1: u32 = rng.random_range(1..=6);
        let d2: u32 = rng.random_range(1..=6);
        played += 1;
        if d1 == d2 {
            a += 1;
        } else if d1 + d2 >= 9 {
            b += 1;
        }
        if a == target {
            return (true, played);
        }
        if b == target {
            return (false, played);
        }
    }
}

fn main() {
    let args = parse_args();
    let num_threads = simlab::env_config::init_rayon_threads();

    println!("Dice Duel ({} games, first to {})", args.trials, args.rounds);
    println!("  Threads:     {}", num_threads);
    println!();

    let a_wins = estimate_proportion(args.trials, args.seed, |rng| {
        play_game(rng, args.rounds).0
    });
    let lengths = run_trials(args.trials, args.seed, |rng| {
        play_game(rng, args.rounds).1 as f64
    });
    let length_summary = lengths.summary().unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let per_game_us = a_wins.elapsed.as_secs_f64() * 1e6 / args.trials as f64;

    println!("Results:");
    println!(
        "  P(A wins):    {:.4} \u{00b1} {:.4}  (doubles vs sum >= 9)",
        a_wins.p, a_wins.std_error
    );
    println!("  P(B wins):    {:.4}", 1.0 - a_wins.p);
    println!(
        "  Game length:  {:.2} rounds (std {:.2}, median {})",
        length_summary.mean, length_summary.std_dev, length_summary.median
    );
    println!(
        "  Longest game: {} rounds, shortest: {}",
        length_summary.max, length_summary.min
    );
    println!();
    println!("  Elapsed:     {:.1} ms ({:.2} \u{00b5}s/game)",
        a_wins.elapsed.as_secs_f64() * 1000.0, per_game_us);
}
