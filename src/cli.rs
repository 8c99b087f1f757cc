//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Apply a list of events and print the final state
    Replay {
        /// Events: N or select:N (cell 0-8), jump:N (history step), restart
        #[arg(required = true)]
        events: Vec<String>,

        /// Print the final view as JSON
        #[arg(long)]
        json: bool,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["tictactoe", "replay", "--json", "0", "jump:0"])
            .expect("valid arguments");
        match cli.command {
            Command::Replay { events, json, config } => {
                assert_eq!(events, ["0", "jump:0"]);
                assert!(json);
                assert!(config.is_none());
            }
            Command::Play { .. } => panic!("Expected replay"),
        }
    }
}
