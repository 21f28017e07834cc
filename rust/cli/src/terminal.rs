//! Presenter that keeps a text-mode picture of the game.
//!
//! The interactive loop prints [`format_view`](crate::formatters::format_view)
//! of this state after every turn instead of drawing each frame.

use powerpoker_engine::animation::Point;
use powerpoker_engine::board::{Slot, BOARD_SIZE};
use powerpoker_engine::cards::Card;
use powerpoker_engine::presenter::{Presenter, RenderTarget};

#[derive(Debug, Clone)]
pub struct TerminalView {
    cells: [Option<Card>; BOARD_SIZE],
    next: Option<Card>,
    score: u32,
    high_score: u32,
    status: String,
    interactive: bool,
    /// Slots highlighted since the current turn started.
    marked: Vec<Slot>,
    flight_frames: usize,
}

impl Default for TerminalView {
    fn default() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
            next: None,
            score: 0,
            high_score: 0,
            status: String::new(),
            interactive: false,
            marked: Vec::new(),
            flight_frames: 0,
        }
    }
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn card_at(&self, slot: Slot) -> Option<Card> {
        self.cells[slot.index()]
    }

    pub fn next(&self) -> Option<Card> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn is_marked(&self, slot: Slot) -> bool {
        self.marked.contains(&slot)
    }

    /// Frames drawn by the last flight.
    pub fn flight_frames(&self) -> usize {
        self.flight_frames
    }
}

impl Presenter for TerminalView {
    fn render_card(&mut self, target: RenderTarget, card: Option<Card>) {
        match target {
            RenderTarget::Next => self.next = card,
            RenderTarget::Slot(slot) => self.cells[slot.index()] = card,
        }
    }

    fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    fn set_high_score(&mut self, high_score: u32) {
        self.high_score = high_score;
    }

    fn set_status(&mut self, text: &str) {
        // keep the last hand label visible while the next card is dealt
        if !text.is_empty() {
            self.status = text.to_string();
        }
    }

    fn set_interactive(&mut self, enabled: bool) {
        if !enabled {
            self.marked.clear();
            self.status.clear();
            self.flight_frames = 0;
        }
        self.interactive = enabled;
    }

    fn set_highlight(&mut self, slots: &[Slot], on: bool) {
        if on {
            for s in slots {
                if !self.marked.contains(s) {
                    self.marked.push(*s);
                }
            }
        }
    }

    fn flight_frame(&mut self, _position: Point) {
        self.flight_frames += 1;
    }

    fn flight_done(&mut self) {}
}
