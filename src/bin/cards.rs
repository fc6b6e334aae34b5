//! Five-card hand probabilities, estimated by dealing from a shuffled deck
//! and compared against the exact combinatorial values.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use simlab::datasets::{standard_deck, Card};
use simlab::estimate::estimate_proportion;

struct Args {
    trials: usize,
    seed: u64,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut trials = 200_000usize;
    let mut seed = 42u64;

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
            "--help" | "-h" => {
                println!("Usage: simlab-cards [--trials N] [--seed S]");
                println!();
                println!("  --trials N   Hands dealt per probability (default: 200000)");
                println!("  --seed S     RNG seed (default: 42)");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args { trials, seed }
}

fn deal_hand(deck: &[Card], rng: &mut SmallRng) -> [Card; 5] {
    let mut shuffled = deck.to_vec();
    shuffled.shuffle(rng);
    [shuffled[0], shuffled[1], shuffled[2], shuffled[3], shuffled[4]]
}

fn is_flush(hand: &[Card; 5]) -> bool {
    hand.iter().all(|c| c.suit == hand[0].suit)
}

fn has_pair(hand: &[Card; 5]) -> bool {
    let mut counts = [0u8; 15];
    for c in hand {
        counts[c.rank as usize] += 1;
    }
    counts.iter().any(|&n| n >= 2)
}

fn same_color(hand: &[Card; 5]) -> bool {
    hand.iter().all(|c| c.is_red()) || hand.iter().all(|c| !c.is_red())
}

fn main() {
    let args = parse_args();
    let num_threads = simlab::env_config::init_rayon_threads();
    let deck = standard_deck();

    // C(52,5) = 2,598,960 hands.
    let exact_flush = 5_148.0 / 2_598_960.0; // C(13,5) * 4
    let exact_pair = 1.0 - 1_317_888.0 / 2_598_960.0; // 1 - C(13,5) * 4^5
    let exact_color = 131_560.0 / 2_598_960.0; // 2 * C(26,5)

    println!(
        "Card Hands ({} hands per event, {} threads)",
        args.trials, num_threads
    );
    println!();
    println!(
        "  {:<22} {:>10} {:>10} {:>10} {:>10}",
        "event", "estimate", "exact", "abs err", "std err"
    );
    println!("  {}", "\u{2500}".repeat(66));

    let events: [(&str, fn(&[Card; 5]) -> bool, f64); 3] = [
        ("flush (same suit)", is_flush, exact_flush),
        ("at least one pair", has_pair, exact_pair),
        ("all one color", same_color, exact_color),
    ];

    for (name, event, exact) in events {
        let est = estimate_proportion(args.trials, args.seed, |rng| {
            let hand = deal_hand(&deck, rng);
            event(&hand)
        });
        println!(
            "  {:<22} {:>10.5} {:>10.5} {:>10.5} {:>10.5}",
            name,
            est.p,
            exact,
            (est.p - exact).abs(),
            est.std_error
        );
    }
}
