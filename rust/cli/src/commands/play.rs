//! # Play Command
//!
//! Interactive Power Poker on a terminal.
//!
//! Each prompt takes a slot number for the card shown as `Next`. The turn
//! then runs to completion (flight, row check, column check, next draw)
//! before the board is printed again. After the 25th card the player can
//! start a new game with `n` or leave with `q`.
//!
//! The best score is kept in a JSON file between runs.

use std::io::{BufRead, Write};

use powerpoker_engine::animation::Timing;
use powerpoker_engine::sequencer::{TurnOutcome, TurnReport, TurnSequencer};
use powerpoker_engine::session::GameOverSummary;

use super::game_runtime;
use crate::error::CliError;
use crate::formatters::{format_card, format_hand, format_view};
use crate::io_utils::read_stdin_line;
use crate::store::FileStore;
use crate::terminal::TerminalView;
use crate::ui;
use crate::validation::{PlayInput, parse_play_input};

/// Settings for one `play` session, already merged from flags and config.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    /// Seed of the first game; later games use `seed + n`
    pub seed: Option<u64>,
    /// Real-time pauses between animation steps
    pub animate: bool,
    pub high_score_file: String,
}

type Game = TurnSequencer<TerminalView, FileStore>;

/// Handle the play command: read slots from `stdin` until the player quits
/// or input ends.
///
/// # Errors
///
/// Fails when the high score file cannot be read or output cannot be
/// written. Bad input lines are reported on `err` and the prompt repeats.
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let seed = opts.seed.unwrap_or_else(rand::random);
    let timing = if opts.animate {
        Timing::default()
    } else {
        Timing::instant()
    };
    let rt = game_runtime()?;
    let mut game: Game = TurnSequencer::new(
        TerminalView::new(),
        FileStore::new(&opts.high_score_file),
        timing,
    );

    writeln!(out, "powerpoker: seed={}", seed)?;
    rt.block_on(game.start_game(seed))?;
    write!(out, "{}", format_view(game.presenter()))?;

    let mut started = 1u64;
    let mut finished = 0u64;
    loop {
        if game.session().is_game_over() {
            ui::prompt(out, "New game (n) or quit (q): ")?;
            let Some(line) = read_stdin_line(stdin) else {
                break;
            };
            match parse_play_input(&line) {
                PlayInput::NewGame => {
                    let next_seed = seed.wrapping_add(started);
                    started += 1;
                    writeln!(out, "Game {} (seed={})", started, next_seed)?;
                    rt.block_on(game.new_game(next_seed))?;
                    write!(out, "{}", format_view(game.presenter()))?;
                }
                PlayInput::Quit => break,
                _ => ui::write_error(err, "Type n for a new game or q to quit")?,
            }
            continue;
        }

        ui::prompt(out, "Slot (0-24) or q: ")?;
        let Some(line) = read_stdin_line(stdin) else {
            break;
        };
        match parse_play_input(&line) {
            PlayInput::Quit => break,
            PlayInput::NewGame => {
                ui::write_error(err, "Finish the current game first, or quit with q")?
            }
            PlayInput::Invalid(msg) => ui::write_error(err, &msg)?,
            PlayInput::Slot(slot) => match rt.block_on(game.place(slot)) {
                TurnOutcome::Ignored => {
                    ui::write_error(err, &format!("Slot {} is already occupied", slot))?
                }
                TurnOutcome::Played(report) => {
                    write_turn(out, &report)?;
                    write!(out, "{}", format_view(game.presenter()))?;
                    if let Some(summary) = report.game_over {
                        finished += 1;
                        write_game_over(out, &summary)?;
                    }
                }
            },
        }
    }

    writeln!(out, "Games finished: {}", finished)?;
    Ok(())
}

fn write_turn(out: &mut dyn Write, report: &TurnReport) -> Result<(), CliError> {
    writeln!(out, "Placed {} on slot {}", format_card(&report.card), report.slot)?;
    if report.row.rank.is_some() {
        writeln!(out, "Row {}: {}", report.slot.row(), format_hand(&report.row))?;
    }
    if report.column.rank.is_some() {
        writeln!(
            out,
            "Column {}: {}",
            report.slot.col(),
            format_hand(&report.column)
        )?;
    }
    Ok(())
}

fn write_game_over(out: &mut dyn Write, summary: &GameOverSummary) -> Result<(), CliError> {
    writeln!(out, "Final score: {}", summary.score)?;
    if summary.new_high_score {
        writeln!(out, "New high score!")?;
    } else {
        writeln!(out, "High score: {}", summary.high_score)?;
    }
    Ok(())
}
