use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// The undrawn card pool.
///
/// Cards `[0, remaining)` are still in the deck; everything past `remaining`
/// has been drawn, most recent first. Each draw swaps a uniformly chosen
/// undrawn card into the last undrawn position, so sampling without
/// replacement costs O(1) and the full 52 cards stay accounted for.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    remaining: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            cards: full_deck(),
            remaining: crate::cards::DECK_SIZE,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Draws one card uniformly at random from the undrawn cards.
    ///
    /// # Panics
    ///
    /// Panics when the deck is empty. A game consumes at most 25 of the 52
    /// cards, so this only fires on a broken caller.
    pub fn draw(&mut self) -> Card {
        assert!(self.remaining > 0, "draw from an exhausted deck");
        let k = self.rng.random_range(0..self.remaining);
        self.remaining -= 1;
        self.cards.swap(k, self.remaining);
        self.cards[self.remaining]
    }

    /// Puts every card back in the fixed enumeration order. The RNG stream
    /// continues where it left off.
    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.remaining = self.cards.len();
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Cards not yet drawn, in their current (partially permuted) order.
    pub fn undrawn(&self) -> &[Card] {
        &self.cards[..self.remaining]
    }

    /// Cards already drawn, oldest draw last.
    pub fn drawn(&self) -> &[Card] {
        &self.cards[self.remaining..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn undrawn_and_drawn_partition_the_deck() {
        let mut deck = Deck::new_with_seed(7);
        for _ in 0..10 {
            deck.draw();
        }
        assert_eq!(deck.remaining(), 42);
        assert_eq!(deck.drawn().len(), 10);
        let all: HashSet<Card> = deck.undrawn().iter().chain(deck.drawn()).copied().collect();
        assert_eq!(all.len(), 52);
    }

    #[test]
    fn last_drawn_card_sits_at_the_boundary() {
        let mut deck = Deck::new_with_seed(99);
        let c = deck.draw();
        assert_eq!(deck.drawn()[0], c);
        assert!(!deck.undrawn().contains(&c));
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn drawing_past_52_panics() {
        let mut deck = Deck::new_with_seed(1);
        for _ in 0..53 {
            deck.draw();
        }
    }
}
