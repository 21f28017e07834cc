//! Simulation command handler: unattended games driven by a placer.
//!
//! Games run with [`Timing::instant`], a [`NullPresenter`] and an
//! in-memory high score, so nothing touches the terminal or the player's
//! high score file. Game `i` is dealt from `seed + i`, which makes every
//! run reproducible.
//!
//! # Examples
//!
//! ```no_run
//! use powerpoker_cli::commands::{handle_sim_command, SimOptions};
//! use std::io;
//!
//! let opts = SimOptions {
//!     games: 100,
//!     seed: Some(42),
//!     placer: "greedy".to_string(),
//!     output: Some("data/games.jsonl".to_string()),
//! };
//! handle_sim_command(opts, &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use std::io::Write;
use std::path::Path;

use powerpoker_ai::{Placer, create_placer};
use powerpoker_engine::animation::Timing;
use powerpoker_engine::presenter::NullPresenter;
use powerpoker_engine::record::{GameLogger, GameRecorder};
use powerpoker_engine::sequencer::{TurnOutcome, TurnSequencer};
use powerpoker_engine::session::GameOverSummary;
use powerpoker_engine::store::MemoryStore;

use super::game_runtime;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;

#[derive(Debug, Clone)]
pub struct SimOptions {
    pub games: u64,
    pub seed: Option<u64>,
    pub placer: String,
    pub output: Option<String>,
}

type Game = TurnSequencer<NullPresenter, MemoryStore>;

/// Handle the sim command: play `games` games and print one line per game
/// plus a summary.
///
/// # Errors
///
/// - `games` is zero or the placer name is unknown
/// - the output file cannot be created or written
/// - the placer picks an occupied slot
pub fn handle_sim_command(
    opts: SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let base_seed = opts.seed.unwrap_or_else(rand::random);
    let Some(mut placer) = create_placer(&opts.placer, base_seed) else {
        let msg = format!(
            "Unknown placer '{}' (expected one of: {})",
            opts.placer,
            powerpoker_ai::PLACER_NAMES.join(", ")
        );
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    };

    let mut logger = match opts.output.as_deref() {
        Some(p) => open_logger(Path::new(p), err)?,
        None => GameLogger::detached(&chrono::Utc::now().format("%Y%m%d").to_string()),
    };

    let rt = game_runtime()?;
    let mut game: Game = TurnSequencer::new(NullPresenter, MemoryStore::new(), Timing::instant());
    let mut total = 0u64;
    let mut best = 0u32;

    for i in 0..opts.games {
        let game_seed = base_seed.wrapping_add(i);
        let (recorder, summary) =
            rt.block_on(play_unattended(&mut game, placer.as_mut(), game_seed))?;
        let mut record = recorder.finish(logger.next_id(), Some(game_seed), &summary);
        record.placer = Some(placer.name().to_string());
        if let Err(e) = logger.write(&record) {
            ui::write_error(err, &format!("Failed to write game record: {}", e))?;
            return Err(CliError::Io(e));
        }

        total += u64::from(record.score);
        best = best.max(record.score);
        writeln!(out, "{} seed={} score={}", record.game_id, game_seed, record.score)?;
    }

    tracing::info!(games = opts.games, placer = placer.name(), best, "simulation finished");
    writeln!(
        out,
        "Simulated: {} games (placer={}) mean={:.1} best={}",
        opts.games,
        placer.name(),
        total as f64 / opts.games as f64,
        best
    )?;
    Ok(())
}

fn open_logger(path: &Path, err: &mut dyn Write) -> Result<GameLogger, CliError> {
    if let Err(e) = ensure_parent_dir(path) {
        ui::write_error(err, &e)?;
        return Err(CliError::Io(std::io::Error::other(e)));
    }
    match GameLogger::create(path) {
        Ok(l) => Ok(l),
        Err(e) => {
            ui::write_error(err, &format!("Failed to open output file: {}", e))?;
            Err(CliError::Io(e))
        }
    }
}

/// Plays one whole game, letting `placer` choose every slot.
async fn play_unattended(
    game: &mut Game,
    placer: &mut dyn Placer,
    seed: u64,
) -> Result<(GameRecorder, GameOverSummary), CliError> {
    game.start_game(seed).await?;
    let mut recorder = GameRecorder::new();
    loop {
        let card = game
            .session()
            .current_card()
            .ok_or_else(|| CliError::Engine("no card to place".to_string()))?;
        let slot = placer.choose_slot(game.session().board(), card);
        match game.place(slot).await {
            TurnOutcome::Played(report) => {
                recorder.push(&report);
                if let Some(summary) = report.game_over {
                    return Ok((recorder, summary));
                }
            }
            TurnOutcome::Ignored => {
                return Err(CliError::Engine(format!(
                    "placer '{}' chose occupied slot {}",
                    placer.name(),
                    slot
                )));
            }
        }
    }
}
