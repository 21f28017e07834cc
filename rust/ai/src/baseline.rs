//! Reference strategies used as baselines for comparison.

use crate::Placer;
use powerpoker_engine::board::{Board, Slot};
use powerpoker_engine::cards::Card;
use rand::prelude::*;
use rand_chacha::ChaCha20Rng;

/// Fills the board in reading order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFree;

impl Placer for FirstFree {
    fn choose_slot(&mut self, board: &Board, _card: Card) -> Slot {
        board
            .free_slots()
            .next()
            .expect("choose_slot called on a full board")
    }

    fn name(&self) -> &str {
        "first"
    }
}

/// Picks uniformly among free slots. Deterministic for a given seed.
#[derive(Debug, Clone)]
pub struct RandomPlacer {
    rng: ChaCha20Rng,
}

impl RandomPlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Placer for RandomPlacer {
    fn choose_slot(&mut self, board: &Board, _card: Card) -> Slot {
        let free: Vec<Slot> = board.free_slots().collect();
        *free
            .choose(&mut self.rng)
            .expect("choose_slot called on a full board")
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    #[test]
    fn first_free_skips_occupied_slots() {
        let mut board = Board::new();
        board.place(Slot::new(0).unwrap(), card("00c"));
        board.place(Slot::new(1).unwrap(), card("01c"));
        assert_eq!(FirstFree.choose_slot(&board, card("02c")).index(), 2);
    }

    #[test]
    fn random_only_picks_free_slots() {
        let mut board = Board::new();
        for i in 0..24 {
            board.place(Slot::new(i).unwrap(), powerpoker_engine::cards::full_deck()[i]);
        }
        let mut placer = RandomPlacer::new(3);
        for _ in 0..10 {
            assert_eq!(placer.choose_slot(&board, card("12s")).index(), 24);
        }
    }

    #[test]
    fn random_is_reproducible() {
        let board = Board::new();
        let mut a = RandomPlacer::new(99);
        let mut b = RandomPlacer::new(99);
        let xs: Vec<Slot> = (0..8).map(|_| a.choose_slot(&board, card("00c"))).collect();
        let ys: Vec<Slot> = (0..8).map(|_| b.choose_slot(&board, card("00c"))).collect();
        assert_eq!(xs, ys);
    }
}
