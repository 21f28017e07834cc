//! Statistics aggregation over game records.
//!
//! Accepts one JSONL file (optionally `.zst`) or a directory that is
//! searched recursively for `.jsonl` and `.jsonl.zst` files.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use powerpoker_engine::record::GameRecord;

use crate::error::CliError;
use crate::io_utils::{collect_record_files, read_text_auto};
use crate::ui;

#[derive(Debug, Default)]
struct StatsState {
    games: u64,
    total_score: u64,
    best_score: u32,
    new_high_scores: u64,
    hands: BTreeMap<&'static str, u64>,
    placers: BTreeMap<String, u64>,
    /// Unparseable final line without a newline, i.e. a write cut short
    skipped: u64,
    corrupted: u64,
}

impl StatsState {
    fn add(&mut self, rec: &GameRecord) {
        self.games += 1;
        self.total_score += u64::from(rec.score);
        self.best_score = self.best_score.max(rec.score);
        if rec.new_high_score {
            self.new_high_scores += 1;
        }
        for p in &rec.placements {
            for rank in [p.row, p.column].into_iter().flatten() {
                *self.hands.entry(rank.label()).or_insert(0) += 1;
            }
        }
        let placer = rec.placer.clone().unwrap_or_else(|| "human".to_string());
        *self.placers.entry(placer).or_insert(0) += 1;
    }

    fn consume(&mut self, content: &str) {
        let has_trailing_nl = content.ends_with('\n');
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        for (i, line) in lines.iter().enumerate() {
            match serde_json::from_str::<GameRecord>(line) {
                Ok(rec) => self.add(&rec),
                Err(_) if i == lines.len() - 1 && !has_trailing_nl => self.skipped += 1,
                Err(_) => self.corrupted += 1,
            }
        }
    }
}

/// Aggregates game records and prints a JSON summary: game count, mean and
/// best score, how many games set a new high score, hands scored by
/// category, and games per placer.
///
/// Corrupted lines are skipped and counted on `err`. A single file with no
/// readable record is an error.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(&input);
    let mut state = StatsState::default();

    if path.is_dir() {
        for file in collect_record_files(path) {
            match read_text_auto(&file) {
                Ok(content) => state.consume(&content),
                Err(e) => {
                    tracing::warn!(file = %file.display(), error = %e, "unreadable record file");
                    state.corrupted += 1;
                }
            }
        }
    } else {
        match read_text_auto(path) {
            Ok(content) => state.consume(&content),
            Err(e) => {
                ui::write_error(err, &format!("Failed to read {}: {}", input, e))?;
                return Err(CliError::Config(format!("Failed to read {}: {}", input, e)));
            }
        }
    }

    if state.corrupted > 0 {
        ui::write_error(
            err,
            &format!("Skipped {} corrupted record(s)", state.corrupted),
        )?;
    }
    if state.skipped > 0 {
        ui::write_error(
            err,
            &format!("Discarded {} incomplete final line(s)", state.skipped),
        )?;
    }
    if !path.is_dir() && state.games == 0 && (state.corrupted > 0 || state.skipped > 0) {
        ui::write_error(err, "Invalid record")?;
        return Err(CliError::InvalidInput("Invalid record".to_string()));
    }

    let mean = if state.games == 0 {
        0.0
    } else {
        state.total_score as f64 / state.games as f64
    };
    let summary = serde_json::json!({
        "games": state.games,
        "mean_score": (mean * 100.0).round() / 100.0,
        "best_score": state.best_score,
        "new_high_scores": state.new_high_scores,
        "hands": state.hands,
        "placers": state.placers,
    });
    let json_output = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
    writeln!(out, "{}", json_output)?;
    Ok(())
}
