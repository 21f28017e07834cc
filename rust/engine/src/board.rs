use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Cards in a line; the board is `LINE_SIZE` × `LINE_SIZE`.
pub const LINE_SIZE: usize = 5;
/// Number of cells on the board.
pub const BOARD_SIZE: usize = LINE_SIZE * LINE_SIZE;

/// A board cell index in `0..25`, row-major.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Slot(u8);

impl Slot {
    pub fn new(index: usize) -> Result<Slot, GameError> {
        if index < BOARD_SIZE {
            Ok(Slot(index as u8))
        } else {
            Err(GameError::SlotOutOfRange { slot: index })
        }
    }

    pub fn at(row: usize, col: usize) -> Result<Slot, GameError> {
        if row >= LINE_SIZE || col >= LINE_SIZE {
            return Err(GameError::SlotOutOfRange {
                slot: row * LINE_SIZE + col,
            });
        }
        Slot::new(row * LINE_SIZE + col)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> usize {
        self.index() / LINE_SIZE
    }

    pub fn col(self) -> usize {
        self.index() % LINE_SIZE
    }

    pub fn all() -> impl Iterator<Item = Slot> {
        (0..BOARD_SIZE as u8).map(Slot)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for Slot {
    type Error = GameError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Slot::new(value)
    }
}

impl From<Slot> for usize {
    fn from(slot: Slot) -> Self {
        slot.index()
    }
}

/// A card together with the slot it was taken from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LineCard {
    pub card: Card,
    pub slot: Slot,
}

/// The occupied cells of one row or column, in slot order.
/// A line is complete once it holds `LINE_SIZE` cards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Line {
    cards: Vec<LineCard>,
}

impl Line {
    pub fn cards(&self) -> &[LineCard] {
        &self.cards
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == LINE_SIZE
    }
}

/// Fixed 25-cell grid. Cells only ever go from empty to occupied; a new
/// game starts from a fresh board.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Board {
    cells: [Option<Card>; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `card` in `slot`. Returns `false` and leaves the board untouched
    /// when the slot is already occupied.
    pub fn place(&mut self, slot: Slot, card: Card) -> bool {
        let cell = &mut self.cells[slot.index()];
        if cell.is_some() {
            return false;
        }
        *cell = Some(card);
        true
    }

    pub fn get(&self, slot: Slot) -> Option<Card> {
        self.cells[slot.index()]
    }

    pub fn is_occupied(&self, slot: Slot) -> bool {
        self.cells[slot.index()].is_some()
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.filled() == BOARD_SIZE
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cells.iter().flatten().copied()
    }

    pub fn free_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        Slot::all().filter(|s| !self.is_occupied(*s))
    }

    pub fn row(&self, row: usize) -> Line {
        self.collect_line((0..LINE_SIZE).map(|x| row * LINE_SIZE + x))
    }

    pub fn column(&self, col: usize) -> Line {
        self.collect_line((0..LINE_SIZE).map(|y| y * LINE_SIZE + col))
    }

    fn collect_line(&self, positions: impl Iterator<Item = usize>) -> Line {
        let cards = positions
            .filter_map(|pos| {
                self.cells.get(pos).copied().flatten().map(|card| LineCard {
                    card,
                    slot: Slot(pos as u8),
                })
            })
            .collect();
        Line { cards }
    }
}
