//! Error types for the CLI application.
//!
//! This module defines the error types used throughout the CLI for better
//! error propagation and handling.
//!
//! ## Batch Validation Errors
//!
//! The `BatchValidationError<T>` type collects per-item failures with context
//! for commands that check many records at once, such as `verify`.

use std::fmt;

use powerpoker_engine::errors::GameError;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

// Automatic conversion from std::io::Error to CliError
impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        match error {
            GameError::InvalidCardCode(_)
            | GameError::SlotOutOfRange { .. }
            | GameError::WrongCardCount { .. } => CliError::InvalidInput(error.to_string()),
            GameError::SlotOccupied { .. } | GameError::Store(_) => {
                CliError::Engine(error.to_string())
            }
        }
    }
}

// Conversion from String to CliError (for engine errors)
impl From<String> for CliError {
    fn from(error: String) -> Self {
        CliError::Engine(error)
    }
}

/// Generic error type for batch validation operations.
///
/// Each error tracks the item that failed and a descriptive error message.
///
/// # Examples
///
/// ```rust
/// use powerpoker_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: 5,
///     message: "score mismatch".to_string(),
/// };
/// assert_eq!(error.to_string(), "5: score mismatch");
/// ```
#[derive(Debug)]
pub struct BatchValidationError<T> {
    /// Context identifying the item that failed validation
    pub item_context: T,
    /// Descriptive error message
    pub message: String,
}

impl<T: std::fmt::Display> std::fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_mapping() {
        let e: CliError = GameError::SlotOutOfRange { slot: 30 }.into();
        assert!(matches!(e, CliError::InvalidInput(_)));
        assert!(e.to_string().contains("Slot 30 is out of range"));

        let e: CliError = GameError::Store("disk full".into()).into();
        assert!(matches!(e, CliError::Engine(_)));
    }

    #[test]
    fn test_batch_validation_error_with_string() {
        let error = BatchValidationError {
            item_context: "games.jsonl".to_string(),
            message: "File not found".to_string(),
        };
        assert_eq!(error.to_string(), "games.jsonl: File not found");
    }
}
