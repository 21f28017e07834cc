//! One-ply lookahead: take the slot that scores the most right now.

use crate::Placer;
use powerpoker_engine::board::{Board, Slot};
use powerpoker_engine::cards::Card;
use powerpoker_engine::hand::evaluate_line;

/// Maximises the row plus column score this placement completes.
/// Ties go to the lowest slot index, so the choice is deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPlacer;

impl GreedyPlacer {
    pub fn new() -> Self {
        Self
    }

    /// Score gained by putting `card` on `slot`. `slot` must be free.
    pub fn gain(board: &Board, slot: Slot, card: Card) -> u32 {
        let mut next = board.clone();
        if !next.place(slot, card) {
            return 0;
        }
        evaluate_line(&next.row(slot.row())).score()
            + evaluate_line(&next.column(slot.col())).score()
    }
}

impl Placer for GreedyPlacer {
    fn choose_slot(&mut self, board: &Board, card: Card) -> Slot {
        let mut best: Option<(Slot, u32)> = None;
        for slot in board.free_slots() {
            let gain = Self::gain(board, slot, card);
            if best.is_none_or(|(_, g)| gain > g) {
                best = Some((slot, gain));
            }
        }
        best.map(|(slot, _)| slot)
            .expect("choose_slot called on a full board")
    }

    fn name(&self) -> &str {
        "greedy"
    }
}
