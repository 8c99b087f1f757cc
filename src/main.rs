//! tictactoe - play or replay a time-travel tic-tac-toe game.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use timetravel_tictactoe::{Config, script, tui};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(config),
        Command::Replay {
            events,
            json,
            config,
        } => run_replay(events, json, config),
    }
}

/// Run the interactive terminal UI
fn run_play(config: Option<PathBuf>) -> Result<()> {
    let config = Config::load(config.as_deref()).context("Failed to load config")?;
    tui::run(&config)
}

/// Apply scripted events and print the resulting view
fn run_replay(events: Vec<String>, json: bool, config: Option<PathBuf>) -> Result<()> {
    let config = Config::load(config.as_deref()).context("Failed to load config")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let events = script::parse_events(&events).context("Failed to parse events")?;
    info!(count = events.len(), "Replaying events");

    let report = script::run(&events).context("Replay aborted")?;
    for rejected in &report.rejected {
        warn!(event = rejected.index, rejection = %rejected.rejection, "Move rejected");
    }

    let view = report.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", script::render_text(&view, *config.show_cell_numbers()));
        for rejected in &report.rejected {
            println!("note: event {} ignored: {}", rejected.index, rejected.rejection);
        }
    }

    Ok(())
}
