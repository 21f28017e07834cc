//! Configuration command handler.
//!
//! Prints every setting with the place it came from (`default`, `file` or
//! `env`) as pretty JSON:
//!
//! ```json
//! {
//!   "placer": {
//!     "value": "greedy",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(e.to_string()));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "high_score_file": {
            "value": config.high_score_file,
            "source": sources.high_score_file,
        },
        "animate": {
            "value": config.animate,
            "source": sources.animate,
        },
        "placer": {
            "value": config.placer,
            "source": sources.placer,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
