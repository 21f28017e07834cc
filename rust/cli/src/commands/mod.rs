//! Command handler modules for the powerpoker CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers for that command
//! - Output streams (`&mut dyn Write`) passed in by the caller
//! - Errors propagated via the `CliError` enum

pub mod cfg;
pub mod eval;
pub mod play;
pub mod sim;
pub mod stats;
pub mod verify;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use play::{PlayOptions, handle_play_command};
pub use sim::{SimOptions, handle_sim_command};
pub use stats::handle_stats_command;
pub use verify::handle_verify_command;

/// Single-threaded runtime with timers, enough to drive one game at a time.
pub(crate) fn game_runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
}
