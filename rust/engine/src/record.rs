use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::board::{Board, Slot};
use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::{evaluate_line, HandRank};
use crate::sequencer::TurnReport;
use crate::session::GameOverSummary;

/// One placement of a finished game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub slot: Slot,
    pub card: Card,
    /// Hand completed in the row, if any
    #[serde(default)]
    pub row: Option<HandRank>,
    /// Hand completed in the column, if any
    #[serde(default)]
    pub column: Option<HandRank>,
    pub score_delta: u32,
}

impl From<&TurnReport> for PlacementRecord {
    fn from(report: &TurnReport) -> Self {
        Self {
            slot: report.slot,
            card: report.card,
            row: report.row.rank,
            column: report.column.rank,
            score_delta: report.score_delta(),
        }
    }
}

/// Complete record of a game, serialized one per line (JSONL).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// Deck seed; replaying it reproduces the draw order
    pub seed: Option<u64>,
    /// Placements in play order
    pub placements: Vec<PlacementRecord>,
    pub score: u32,
    #[serde(default)]
    pub new_high_score: bool,
    /// Name of the placement strategy, when the game was played unattended
    #[serde(default)]
    pub placer: Option<String>,
    /// Timestamp when the game finished (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Collects turn reports into a [`GameRecord`].
#[derive(Debug, Default, Clone)]
pub struct GameRecorder {
    placements: Vec<PlacementRecord>,
}

impl GameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, report: &TurnReport) {
        self.placements.push(report.into());
    }

    pub fn finish(self, game_id: String, seed: Option<u64>, summary: &GameOverSummary) -> GameRecord {
        GameRecord {
            game_id,
            seed,
            placements: self.placements,
            score: summary.score,
            new_high_score: summary.new_high_score,
            placer: None,
            ts: None,
        }
    }
}

/// Recomputes a game's score from its placements alone.
///
/// Fails on a placement into an occupied slot, since a recorded game can
/// never contain one.
pub fn replay_score(record: &GameRecord) -> Result<u32, GameError> {
    let mut board = Board::new();
    let mut score = 0u32;
    for p in &record.placements {
        if !board.place(p.slot, p.card) {
            return Err(GameError::SlotOccupied { slot: p.slot.index() });
        }
        score += evaluate_line(&board.row(p.slot.row())).score();
        score += evaluate_line(&board.column(p.slot.col())).score();
    }
    Ok(score)
}

/// Appends finished games to a JSONL file.
#[derive(Debug)]
pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that only hands out ids; `write` is a no-op.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
