//! Literal toy datasets used by the exercises.
//!
//! These are inputs, not state: each exercise copies what it needs and the
//! arrays are never mutated.

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

pub const SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

/// A playing card. Rank 2-10 are pip cards, 11=J, 12=Q, 13=K, 14=A.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub rank: u8,
    pub suit: Suit,
}

impl Card {
    pub fn is_red(&self) -> bool {
        matches!(self.suit, Suit::Diamonds | Suit::Hearts)
    }
}

/// Build the standard 52-card deck, ordered by suit then rank.
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for &suit in &SUITS {
        for rank in 2..=14 {
            deck.push(Card { rank, suit });
        }
    }
    deck
}

/// Lengths (cm) of 20 wrenches from one production run.
pub const WRENCH_LENGTHS: [f64; 20] = [
    10.02, 9.87, 10.11, 9.95, 10.03, 9.92, 10.08, 9.98, 10.15, 9.84, 10.01, 9.96, 10.06, 9.91,
    10.04, 9.99, 10.09, 9.93, 9.97, 10.05,
];

/// Donation amounts ($) from the control arm of a fundraising A/B test.
pub const DONATIONS_A: [f64; 18] = [
    12.0, 25.0, 5.0, 40.0, 15.0, 10.0, 20.0, 8.0, 30.0, 12.0, 18.0, 5.0, 22.0, 10.0, 35.0, 15.0,
    9.0, 14.0,
];

/// Donation amounts ($) from the treatment arm (redesigned landing page).
pub const DONATIONS_B: [f64; 18] = [
    18.0, 30.0, 12.0, 45.0, 22.0, 15.0, 28.0, 10.0, 38.0, 20.0, 25.0, 8.0, 32.0, 16.0, 42.0, 24.0,
    14.0, 19.0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_has_52_unique_cards() {
        let deck = standard_deck();
        assert_eq!(deck.len(), 52);
        for (i, a) in deck.iter().enumerate() {
            for b in &deck[i + 1..] {
                assert!(a != b, "duplicate card {:?}", a);
            }
        }
    }

    #[test]
    fn test_deck_color_split() {
        let deck = standard_deck();
        let red = deck.iter().filter(|c| c.is_red()).count();
        assert_eq!(red, 26);
    }

    #[test]
    fn test_ab_groups_same_size() {
        assert_eq!(DONATIONS_A.len(), DONATIONS_B.len());
    }
}
