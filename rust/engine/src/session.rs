use serde::{Deserialize, Serialize};

use crate::board::{Board, Slot, BOARD_SIZE};
use crate::cards::Card;
use crate::deck::Deck;
use crate::hand::Evaluation;

/// Where the current turn stands. A turn walks these in declaration order,
/// skipping the blink phases when a line scores nothing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Session created, first card not drawn yet.
    Idle,
    /// A card is showing and the player may place it.
    Drawn,
    Flying,
    Placed,
    RowCheck,
    RowBlink,
    ColumnCheck,
    ColumnBlink,
    NextDraw,
    GameOver,
}

/// Final numbers of a finished game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameOverSummary {
    pub score: u32,
    /// High score after this game was taken into account.
    pub high_score: u32,
    /// The game strictly beat the previous high score.
    pub new_high_score: bool,
}

/// All mutable state of one game, owned by a single controller.
#[derive(Debug)]
pub struct GameSession {
    seed: u64,
    deck: Deck,
    board: Board,
    current: Option<Card>,
    score: u32,
    high_score: u32,
    placements: usize,
    phase: Phase,
}

impl GameSession {
    pub fn new(seed: u64, high_score: u32) -> Self {
        Self {
            seed,
            deck: Deck::new_with_seed(seed),
            board: Board::new(),
            current: None,
            score: 0,
            high_score,
            placements: 0,
            phase: Phase::Idle,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The drawn card waiting for placement, or flying to its slot.
    pub fn current_card(&self) -> Option<Card> {
        self.current
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn placements(&self) -> usize {
        self.placements
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_interactive(&self) -> bool {
        self.phase == Phase::Drawn
    }

    pub fn is_turn_in_progress(&self) -> bool {
        !matches!(self.phase, Phase::Idle | Phase::Drawn | Phase::GameOver)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        tracing::debug!(from = ?self.phase, to = ?phase, placements = self.placements, "phase change");
        self.phase = phase;
    }

    /// Draws the next card and hands control back to the player.
    pub fn draw_next(&mut self) -> Card {
        let card = self.deck.draw();
        self.current = Some(card);
        self.set_phase(Phase::Drawn);
        card
    }

    /// Starts a turn on `slot`. Returns the card to place, or `None` when the
    /// session is not accepting input or the slot is taken.
    pub fn begin_turn(&mut self, slot: Slot) -> Option<Card> {
        if !self.is_interactive() || self.board.is_occupied(slot) {
            return None;
        }
        let card = self.current?;
        self.set_phase(Phase::Flying);
        Some(card)
    }

    /// Puts the in-flight card on the board.
    pub fn land(&mut self, slot: Slot) -> Option<Card> {
        if self.phase != Phase::Flying {
            return None;
        }
        let card = self.current?;
        if !self.board.place(slot, card) {
            return None;
        }
        self.current = None;
        self.placements += 1;
        self.set_phase(Phase::Placed);
        Some(card)
    }

    /// Adds the evaluated hand's value to the running score.
    pub fn apply(&mut self, evaluation: &Evaluation) -> u32 {
        let delta = evaluation.score();
        self.score += delta;
        delta
    }

    pub fn is_board_complete(&self) -> bool {
        self.placements == BOARD_SIZE
    }

    /// Closes the game and folds the score into the high score, which only
    /// moves on a strict improvement.
    pub fn finish(&mut self) -> GameOverSummary {
        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }
        self.set_phase(Phase::GameOver);
        GameOverSummary {
            score: self.score,
            high_score: self.high_score,
            new_high_score,
        }
    }

    /// Undrawn cards, board cards and the card in hand, in that order.
    pub fn accounted_cards(&self) -> Vec<Card> {
        self.deck
            .undrawn()
            .iter()
            .copied()
            .chain(self.board.cards())
            .chain(self.current)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn turn_is_refused_until_a_card_is_drawn() {
        let mut s = GameSession::new(5, 0);
        let slot = Slot::new(0).unwrap();
        assert_eq!(s.begin_turn(slot), None);
        let card = s.draw_next();
        assert_eq!(s.begin_turn(slot), Some(card));
        assert!(s.is_turn_in_progress());
        assert!(!s.is_interactive());
        assert_eq!(s.land(slot), Some(card));
        assert_eq!(s.placements(), 1);
        assert_eq!(s.current_card(), None);
    }

    #[test]
    fn occupied_slot_is_refused() {
        let mut s = GameSession::new(5, 0);
        let slot = Slot::new(4).unwrap();
        s.draw_next();
        s.begin_turn(slot);
        s.land(slot);
        let next = s.draw_next();
        assert_eq!(s.begin_turn(slot), None);
        assert_eq!(s.phase(), Phase::Drawn);
        assert_eq!(s.current_card(), Some(next));
    }

    #[test]
    fn cards_stay_accounted_for() {
        let mut s = GameSession::new(11, 0);
        for i in 0..7 {
            s.draw_next();
            let slot = Slot::new(i).unwrap();
            s.begin_turn(slot);
            s.land(slot);
        }
        s.draw_next();
        let cards = s.accounted_cards();
        let unique: HashSet<Card> = cards.iter().copied().collect();
        assert_eq!(cards.len(), 52);
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn high_score_moves_only_on_strict_improvement() {
        let mut tie = GameSession::new(1, 0);
        let summary = tie.finish();
        assert!(!summary.new_high_score);
        assert_eq!(summary.high_score, 0);

        let mut s = GameSession::new(1, 40);
        s.score = 40;
        assert!(!s.finish().new_high_score);

        let mut s = GameSession::new(1, 40);
        s.score = 41;
        let summary = s.finish();
        assert!(summary.new_high_score);
        assert_eq!(summary.high_score, 41);
        assert!(s.is_game_over());
    }
}
