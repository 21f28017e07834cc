use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid card code: {0:?} (expected two-digit rank 00-12 and suit c/d/h/s)")]
    InvalidCardCode(String),
    #[error("Slot {slot} is out of range (0-24)")]
    SlotOutOfRange { slot: usize },
    #[error("Slot {slot} is already occupied")]
    SlotOccupied { slot: usize },
    #[error("A hand needs exactly 5 cards, got {count}")]
    WrongCardCount { count: usize },
    #[error("High score store failure: {0}")]
    Store(String),
}
