//! Terminal front end for the time-travel tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Engine**: [`tictactoe_engine`] owns every board snapshot and the viewed step
//! - **Script**: non-interactive event lists for the `replay` command
//! - **TUI**: ratatui board, status line and navigable move list
//! - **Config**: optional TOML settings shared by both front ends

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod script;
pub mod tui;

pub use config::{Config, ConfigError};
pub use script::{Event, ReplayReport, ScriptError};
