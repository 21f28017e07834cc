//! Parsing of interactive input and record identifiers.

use powerpoker_engine::board::Slot;

/// One line typed at the `play` prompt.
#[derive(Debug, PartialEq)]
pub enum PlayInput {
    Slot(Slot),
    /// `n` or `new`
    NewGame,
    /// `q` or `quit`
    Quit,
    Invalid(String),
}

/// Parses a prompt line (case-insensitive).
///
/// ```rust
/// # use powerpoker_cli::validation::{parse_play_input, PlayInput};
/// use powerpoker_engine::board::Slot;
///
/// assert_eq!(parse_play_input("7"), PlayInput::Slot(Slot::new(7).unwrap()));
/// assert_eq!(parse_play_input("Q"), PlayInput::Quit);
/// assert!(matches!(parse_play_input("25"), PlayInput::Invalid(_)));
/// ```
pub fn parse_play_input(input: &str) -> PlayInput {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => PlayInput::Invalid("Empty input".to_string()),
        "q" | "quit" => PlayInput::Quit,
        "n" | "new" => PlayInput::NewGame,
        other => match other.parse::<usize>() {
            Ok(index) => match Slot::new(index) {
                Ok(slot) => PlayInput::Slot(slot),
                Err(e) => PlayInput::Invalid(e.to_string()),
            },
            Err(_) => PlayInput::Invalid(format!(
                "Unrecognized input '{}'. Enter a slot number 0-24, n or q",
                other
            )),
        },
    }
}

/// Game ids look like `YYYYMMDD-NNNNNN`.
pub fn is_valid_game_id(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 15
        && b[..8].iter().all(u8::is_ascii_digit)
        && b[8] == b'-'
        && b[9..].iter().all(u8::is_ascii_digit)
}
