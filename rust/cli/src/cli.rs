//! Command-line surface of the `powerpoker` binary.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "powerpoker",
    version,
    about = "Power Poker: place 25 cards on a 5x5 grid and score poker hands in every row and column"
)]
pub struct PowerpokerCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively: type a slot number (0-24) for each card
    Play {
        /// Deck seed; random when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Skip flight, blink and draw pauses
        #[arg(long)]
        instant: bool,
        /// Override the high score file from the configuration
        #[arg(long)]
        high_score_file: Option<String>,
    },
    /// Classify five card codes (e.g. 00c 10h 11h 12h 09h)
    Eval {
        #[arg(value_name = "CARD", required = true)]
        cards: Vec<String>,
    },
    /// Play unattended games with a placement strategy
    Sim {
        #[arg(long)]
        games: u64,
        /// Seed of the first game; game i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        /// first, random or greedy
        #[arg(long)]
        placer: Option<String>,
        /// Write one JSON record per game to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Summarize game records (JSONL, optionally .zst, file or directory)
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Replay game records and check their scores and placements
    Verify {
        #[arg(long)]
        input: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subcommand_parses() {
        let commands = vec![
            vec!["powerpoker", "cfg"],
            vec!["powerpoker", "play", "--seed", "3", "--instant"],
            vec!["powerpoker", "eval", "00c", "01c", "02c", "03c", "04c"],
            vec!["powerpoker", "sim", "--games", "2", "--placer", "random"],
            vec!["powerpoker", "stats", "--input", "games.jsonl"],
            vec!["powerpoker", "verify", "--input", "games.jsonl"],
        ];
        for args in commands {
            let result = PowerpokerCli::try_parse_from(&args);
            assert!(result.is_ok(), "Failed to parse: {:?}", args);
        }
    }

    #[test]
    fn sim_requires_games() {
        assert!(PowerpokerCli::try_parse_from(["powerpoker", "sim"]).is_err());
    }

    #[test]
    fn eval_requires_cards() {
        assert!(PowerpokerCli::try_parse_from(["powerpoker", "eval"]).is_err());
    }
}
