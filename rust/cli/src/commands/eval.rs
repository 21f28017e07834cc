//! `eval`: classify five cards without playing a game.

use std::collections::HashSet;
use std::io::Write;

use powerpoker_engine::cards::Card;
use powerpoker_engine::hand::evaluate_cards;

use crate::error::CliError;
use crate::formatters::{format_card, format_hand, format_scored_cards};

/// Parses the card codes, evaluates them as one line and prints the hand,
/// its score and which cards make it.
///
/// Fails on a malformed code, a repeated card, or anything but five cards.
pub fn handle_eval_command(codes: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = codes
        .iter()
        .map(|code| code.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::new();
    if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(CliError::InvalidInput(format!("Duplicate card {}", dup)));
    }

    let evaluation = evaluate_cards(&cards)?;
    let pretty: Vec<String> = cards.iter().map(format_card).collect();
    writeln!(out, "Cards: {}", pretty.join(" "))?;
    writeln!(out, "Hand: {}", format_hand(&evaluation))?;
    writeln!(out, "Scoring: {}", format_scored_cards(&evaluation))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_eval_straight_flush() {
        let mut out = Vec::new();
        handle_eval_command(&codes(&["00c", "01c", "02c", "03c", "04c"]), &mut out).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("Hand: Straight Flush (300)"));
        assert!(s.contains("Scoring: 00c* 01c* 02c* 03c* 04c*"));
    }

    #[test]
    fn test_eval_rejects_duplicates_and_bad_codes() {
        let mut out = Vec::new();
        let dup = handle_eval_command(&codes(&["00c", "00c", "02c", "03c", "04c"]), &mut out);
        assert!(matches!(dup, Err(CliError::InvalidInput(msg)) if msg.contains("Duplicate card 00c")));

        let bad = handle_eval_command(&codes(&["13c", "00d", "02c", "03c", "04c"]), &mut out);
        assert!(matches!(bad, Err(CliError::InvalidInput(_))));

        let short = handle_eval_command(&codes(&["00c", "01c"]), &mut out);
        assert!(matches!(short, Err(CliError::InvalidInput(msg)) if msg.contains("exactly 5")));
    }
}
