//! Scripted events for non-interactive play.
//!
//! A script is a list of tokens: `N` or `select:N` picks cell N (0-8),
//! `jump:N` views history step N, and `restart` starts a new game.

use derive_more::{Display, Error};
use serde::Serialize;
use std::num::ParseIntError;
use std::str::FromStr;
use tictactoe_engine::{Cell, GameHistory, GameView, HistoryError, MoveOutcome, Rejection};
use tracing::{debug, instrument};

/// One event forwarded to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Event {
    /// Select the cell at this index.
    Select(usize),
    /// View this history step.
    Jump(usize),
    /// Discard the game and start over.
    Restart,
}

/// Malformed script token.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ScriptError {
    /// The token is not a known event.
    #[display("Unknown event '{token}' (expected N, select:N, jump:N or restart)")]
    UnknownEvent {
        /// The offending token.
        #[error(not(source))]
        token: String,
    },
    /// The event argument is not a non-negative integer.
    #[display("Invalid number in '{token}': {source}")]
    InvalidNumber {
        /// The offending token.
        token: String,
        /// Parse failure.
        source: ParseIntError,
    },
}

impl FromStr for Event {
    type Err = ScriptError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        let number = |text: &str| {
            text.parse::<usize>()
                .map_err(|source| ScriptError::InvalidNumber {
                    token: token.to_string(),
                    source,
                })
        };

        match token.split_once(':') {
            Some(("select", arg)) => number(arg).map(Event::Select),
            Some(("jump", arg)) => number(arg).map(Event::Jump),
            Some(_) => Err(ScriptError::UnknownEvent {
                token: token.to_string(),
            }),
            None if token == "restart" => Ok(Event::Restart),
            None if token.starts_with(|c: char| c.is_ascii_digit()) => {
                number(token).map(Event::Select)
            }
            None => Err(ScriptError::UnknownEvent {
                token: token.to_string(),
            }),
        }
    }
}

/// Parses every token, stopping at the first malformed one.
pub fn parse_events<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Event>, ScriptError> {
    tokens.iter().map(|token| token.as_ref().parse()).collect()
}

/// A refused move recorded while running a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RejectedEvent {
    /// Position of the event in the script.
    pub index: usize,
    /// Why it was refused.
    pub rejection: Rejection,
}

/// Final state of a script run.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// The game after every event.
    pub game: GameHistory,
    /// Moves that were refused along the way.
    pub rejected: Vec<RejectedEvent>,
}

impl ReplayReport {
    /// View of the final state.
    pub fn view(&self) -> GameView {
        self.game.current_view()
    }
}

/// Applies `events` in order to a new game.
///
/// Rejected moves are collected and do not stop the run.
///
/// # Errors
///
/// Returns the engine error for the first out-of-range cell or step.
#[instrument(skip(events), fields(count = events.len()))]
pub fn run(events: &[Event]) -> Result<ReplayReport, HistoryError> {
    let mut game = GameHistory::new();
    let mut rejected = Vec::new();

    for (index, event) in events.iter().enumerate() {
        debug!(index, ?event, "Applying event");
        match *event {
            Event::Select(cell) => {
                if let MoveOutcome::Rejected(rejection) = game.select_cell(cell)? {
                    rejected.push(RejectedEvent { index, rejection });
                }
            }
            Event::Jump(step) => game.jump_to(step)?,
            Event::Restart => game.restart(),
        }
    }

    Ok(ReplayReport { game, rejected })
}

/// Renders a view as plain text: board, status line and move list.
///
/// The viewed step in the list is marked with `>`.
pub fn render_text(view: &GameView, show_cell_numbers: bool) -> String {
    let mut out = String::new();
    for (index, cell) in view.board().cells().iter().enumerate() {
        let symbol = match cell {
            Cell::Marked(mark) => mark.to_string(),
            Cell::Empty if show_cell_numbers => (index + 1).to_string(),
            Cell::Empty => " ".to_string(),
        };
        out.push_str(&symbol);
        match index % 3 {
            2 if index < 8 => out.push_str("\n-+-+-\n"),
            2 => out.push('\n'),
            _ => out.push('|'),
        }
    }

    out.push('\n');
    out.push_str(&view.status().to_string());
    out.push_str("\n\n");

    for step in view.steps() {
        let marker = if *step.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{marker} {}. {}\n", step.step(), step.label()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{GameStatus, Mark, Position};

    #[test]
    fn test_parse_tokens() {
        assert_eq!("4".parse::<Event>(), Ok(Event::Select(4)));
        assert_eq!("select:7".parse::<Event>(), Ok(Event::Select(7)));
        assert_eq!("jump:0".parse::<Event>(), Ok(Event::Jump(0)));
        assert_eq!(" restart ".parse::<Event>(), Ok(Event::Restart));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "undo".parse::<Event>(),
            Err(ScriptError::UnknownEvent {
                token: "undo".to_string()
            })
        );
        assert!(matches!(
            "move:3".parse::<Event>(),
            Err(ScriptError::UnknownEvent { .. })
        ));
        assert!(matches!(
            "jump:-1".parse::<Event>(),
            Err(ScriptError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_parse_events_stops_at_first_error() {
        let result = parse_events(&["0", "1", "bogus", "2"]);
        assert!(matches!(result, Err(ScriptError::UnknownEvent { token }) if token == "bogus"));
    }

    #[test]
    fn test_run_collects_rejections() {
        let events = [Event::Select(4), Event::Select(4), Event::Select(0)];
        let report = run(&events).expect("valid events");

        assert_eq!(report.game.step_count(), 3);
        assert_eq!(
            report.rejected,
            [RejectedEvent {
                index: 1,
                rejection: Rejection::CellOccupied(Position::Center),
            }]
        );
    }

    #[test]
    fn test_run_stops_on_invalid_step() {
        let events = [Event::Select(0), Event::Jump(5)];
        assert_eq!(
            run(&events).unwrap_err(),
            HistoryError::StepOutOfRange { step: 5, len: 2 }
        );
    }

    #[test]
    fn test_run_restart() {
        let report = run(&[Event::Select(0), Event::Restart, Event::Select(8)]).expect("valid");
        assert_eq!(report.game.step_count(), 2);
        assert_eq!(report.view().status(), &GameStatus::InProgress(Mark::O));
    }

    #[test]
    fn test_render_text() {
        let report = run(&[Event::Select(0), Event::Select(4), Event::Jump(1)]).expect("valid");
        let text = render_text(&report.view(), true);
        assert_eq!(
            text,
            "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\n\nNext player: O\n\n  \
             0. Go to game start\n> 1. Go to move #1\n  2. Go to move #2\n"
        );
    }

    #[test]
    fn test_render_text_without_numbers() {
        let report = run(&[Event::Select(4)]).expect("valid");
        let text = render_text(&report.view(), false);
        assert!(text.starts_with(" | | \n-+-+-\n |X| \n"));
    }
}
