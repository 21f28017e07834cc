//! Verify command handler module.
//!
//! Replays every game record and checks:
//!
//! - Game ids have the form `YYYYMMDD-NNNNNN` and are unique
//! - A finished game has exactly 25 placements on 25 distinct slots
//! - No card appears twice in one game
//! - Each placement's `score_delta` matches its row and column hands
//! - The stored score equals the replayed score
//!
//! Errors are collected with their record number and reported together.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use powerpoker_engine::board::{Board, BOARD_SIZE};
use powerpoker_engine::hand::evaluate_line;
use powerpoker_engine::record::{replay_score, GameRecord};

use crate::error::{BatchValidationError, CliError};
use crate::io_utils::read_text_auto;
use crate::validation::is_valid_game_id;

/// The `usize` context is the 1-based record number.
type VerifyError = BatchValidationError<usize>;

/// Handle the verify command - validate game record integrity.
///
/// Prints `Verify: OK (games=N)` when every record passes. Otherwise prints
/// `Verify: FAIL`, lists each problem on `err`, and returns an error.
pub fn handle_verify_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(Path::new(&input))?;
    let mut errors: Vec<VerifyError> = Vec::new();
    let mut ids = HashSet::new();
    let mut games = 0usize;

    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        games += 1;
        let rec: GameRecord = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                errors.push(VerifyError {
                    item_context: games,
                    message: format!("Invalid JSON record: {}", e),
                });
                continue;
            }
        };
        for message in check_record(&rec, &mut ids) {
            errors.push(VerifyError {
                item_context: games,
                message,
            });
        }
    }

    if errors.is_empty() {
        writeln!(out, "Verify: OK (games={})", games)?;
        return Ok(());
    }

    writeln!(out, "Verify: FAIL (games={})", games)?;
    writeln!(err)?;
    writeln!(err, "Errors found:")?;
    for error in &errors {
        writeln!(err, "  Game {}", error)?;
    }
    let bad: HashSet<usize> = errors.iter().map(|e| e.item_context).collect();
    writeln!(
        err,
        "\n{} error(s) in {} of {} game(s)",
        errors.len(),
        bad.len(),
        games
    )?;
    Err(CliError::InvalidInput(format!(
        "{} validation errors found",
        errors.len()
    )))
}

/// Every problem with one record, in check order.
fn check_record(rec: &GameRecord, ids: &mut HashSet<String>) -> Vec<String> {
    let mut problems = Vec::new();

    if !is_valid_game_id(&rec.game_id) {
        problems.push(format!("Invalid game_id format: {}", rec.game_id));
    } else if !ids.insert(rec.game_id.clone()) {
        problems.push(format!("Duplicate game_id: {}", rec.game_id));
    }

    if rec.placements.len() != BOARD_SIZE {
        problems.push(format!(
            "Expected {} placements, found {}",
            BOARD_SIZE,
            rec.placements.len()
        ));
    }

    let mut cards = HashSet::new();
    for p in &rec.placements {
        if !cards.insert(p.card) {
            problems.push(format!("Card {} appears more than once", p.card));
        }
    }

    // slot reuse makes the replay meaningless, so stop there
    let replayed = match replay_score(rec) {
        Ok(score) => score,
        Err(e) => {
            problems.push(e.to_string());
            return problems;
        }
    };
    if replayed != rec.score {
        problems.push(format!(
            "Score mismatch: recorded {}, replayed {}",
            rec.score, replayed
        ));
    }

    let mut board = Board::new();
    for (turn, p) in rec.placements.iter().enumerate() {
        board.place(p.slot, p.card);
        let row = evaluate_line(&board.row(p.slot.row()));
        let column = evaluate_line(&board.column(p.slot.col()));
        if row.rank != p.row || column.rank != p.column {
            problems.push(format!("Placement {} hands do not match the board", turn + 1));
        } else if row.score() + column.score() != p.score_delta {
            problems.push(format!(
                "Placement {} score_delta {} should be {}",
                turn + 1,
                p.score_delta,
                row.score() + column.score()
            ));
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use powerpoker_engine::board::Slot;
    use powerpoker_engine::record::PlacementRecord;

    fn record(placements: Vec<PlacementRecord>, score: u32) -> GameRecord {
        GameRecord {
            game_id: "20260101-000001".into(),
            seed: None,
            placements,
            score,
            new_high_score: false,
            placer: None,
            ts: None,
        }
    }

    fn placement(slot: usize, code: &str) -> PlacementRecord {
        PlacementRecord {
            slot: Slot::new(slot).unwrap(),
            card: code.parse().unwrap(),
            row: None,
            column: None,
            score_delta: 0,
        }
    }

    #[test]
    fn test_short_game_is_flagged() {
        let rec = record(vec![placement(0, "00c")], 0);
        let problems = check_record(&rec, &mut HashSet::new());
        assert_eq!(problems, vec!["Expected 25 placements, found 1".to_string()]);
    }

    #[test]
    fn test_repeated_card_and_slot() {
        let rec = record(vec![placement(0, "00c"), placement(0, "00c")], 0);
        let problems = check_record(&rec, &mut HashSet::new());
        assert!(problems.iter().any(|p| p.contains("Card 00c appears more than once")));
        assert!(problems.iter().any(|p| p.contains("Slot 0 is already occupied")));
    }

    #[test]
    fn test_duplicate_ids() {
        let mut ids = HashSet::new();
        let rec = record(vec![], 0);
        check_record(&rec, &mut ids);
        let problems = check_record(&rec, &mut ids);
        assert!(problems.iter().any(|p| p.starts_with("Duplicate game_id")));
    }
}
