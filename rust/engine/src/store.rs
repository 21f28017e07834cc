use crate::errors::GameError;

/// Durable storage for the best score across games.
pub trait HighScoreStore {
    /// Stored high score, `0` when nothing has been saved yet.
    fn high_score(&self) -> Result<u32, GameError>;

    fn set_high_score(&mut self, value: u32) -> Result<(), GameError>;
}

/// In-process store; forgets everything on drop.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryStore {
    high: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_high_score(high: u32) -> Self {
        Self { high }
    }
}

impl HighScoreStore for MemoryStore {
    fn high_score(&self) -> Result<u32, GameError> {
        Ok(self.high)
    }

    fn set_high_score(&mut self, value: u32) -> Result<(), GameError> {
        self.high = value;
        Ok(())
    }
}
