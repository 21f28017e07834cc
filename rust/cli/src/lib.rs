//! # Power Poker CLI Library
//!
//! Command-line front end for the Power Poker engine: play interactively,
//! classify hands, run unattended games, and analyze or verify game records.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments and dispatches to a subcommand handler. It takes
//! its output streams as parameters, so tests call it in-process.
//! [`run_with_input`] also takes the input stream used by `play`.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = powerpoker_cli::run(
//!     ["powerpoker", "eval", "09h", "10h", "11h", "12h", "00h"],
//!     &mut out,
//!     &mut err,
//! );
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Royal Flush (400)"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Interactive game on stdin/stdout
//! - `eval`: Classify five cards
//! - `sim`: Unattended games with a placement strategy
//! - `stats`: Aggregate JSONL game records
//! - `verify`: Replay records and check their integrity
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod store;
pub mod terminal;
pub mod ui;
pub mod validation;

use cli::{Commands, PowerpokerCli};
use commands::{
    PlayOptions, SimOptions, handle_cfg_command, handle_eval_command, handle_play_command,
    handle_sim_command, handle_stats_command, handle_verify_command,
};

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["play", "eval", "sim", "stats", "verify", "cfg"];

/// Main entry point for the CLI application; `play` reads from the
/// process's stdin.
///
/// Returns the exit code: `0` for success, `2` for errors.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Like [`run`], with an explicit input stream.
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PowerpokerCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Power Poker CLI");
            write_or_exit!(err, "Usage: powerpoker <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: powerpoker --help");
            return exit_code::ERROR;
        }
    };

    let result = dispatch(cli.cmd, stdin, out, err);
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn dispatch(
    cmd: Commands,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Stats { input } => handle_stats_command(input, out, err),
        Commands::Verify { input } => {
            let Some(path) = input else {
                ui::write_error(err, "input required")?;
                return Err(CliError::InvalidInput("--input is required".to_string()));
            };
            handle_verify_command(path, out, err)
        }
        Commands::Play {
            seed,
            instant,
            high_score_file,
        } => {
            let cfg = load_config(err)?;
            let opts = PlayOptions {
                seed: seed.or(cfg.seed),
                animate: cfg.animate && !instant,
                high_score_file: high_score_file.unwrap_or(cfg.high_score_file),
            };
            handle_play_command(opts, out, err, stdin)
        }
        Commands::Sim {
            games,
            seed,
            placer,
            output,
        } => {
            let cfg = load_config(err)?;
            let opts = SimOptions {
                games,
                seed: seed.or(cfg.seed),
                placer: placer.unwrap_or(cfg.placer),
                output,
            };
            handle_sim_command(opts, out, err)
        }
    }
}

fn load_config(err: &mut dyn Write) -> Result<config::Config, CliError> {
    config::load().map_err(|e| {
        let _ = ui::display_warning(err, "configuration could not be loaded");
        CliError::Config(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_lists_commands() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["powerpoker", "deal"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let e = String::from_utf8(err).unwrap();
        for c in COMMANDS {
            assert!(e.contains(&format!("  {}", c)));
        }
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["powerpoker", "--help"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(String::from_utf8(out).unwrap().contains("sim"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_verify_without_input() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["powerpoker", "verify"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        assert!(String::from_utf8(err).unwrap().contains("input required"));
    }
}
