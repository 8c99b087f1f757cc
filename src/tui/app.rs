//! Application state and key handling.

use crossterm::event::KeyCode;
use tictactoe_engine::{Direction, GameHistory, GameView, MoveOutcome, Position};
use tracing::{debug, warn};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
///
/// The game is only ever changed through its own operations; the app adds
/// a cursor and a one-line message on top.
#[derive(Debug, Clone)]
pub struct App {
    game: GameHistory,
    cursor: Position,
    message: Option<String>,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: GameHistory::new(),
            cursor: Position::Center,
            message: None,
        }
    }

    /// Gets the game.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// Gets the view to render.
    pub fn view(&self) -> GameView {
        self.game.current_view()
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the message from the last refused action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        debug!(?key, "Handling key");

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Up => self.move_cursor(Direction::Up),
            KeyCode::Down => self.move_cursor(Direction::Down),
            KeyCode::Left => self.move_cursor(Direction::Left),
            KeyCode::Right => self.move_cursor(Direction::Right),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(position) = c
                    .to_digit(10)
                    .and_then(|digit| Position::from_index(digit as usize - 1))
                {
                    self.cursor = position;
                    self.select(position);
                }
            }
            KeyCode::Char('[') | KeyCode::PageUp => {
                if let Some(step) = self.game.step().checked_sub(1) {
                    self.jump(step);
                }
            }
            KeyCode::Char(']') | KeyCode::PageDown => {
                if !self.game.is_viewing_latest() {
                    self.jump(self.game.step() + 1);
                }
            }
            KeyCode::Home => self.jump(0),
            KeyCode::End => self.jump(self.game.latest_step()),
            KeyCode::Char('n') => {
                self.game.restart();
                self.message = None;
            }
            _ => {}
        }
        Control::Continue
    }

    fn move_cursor(&mut self, direction: Direction) {
        self.cursor = self.cursor.neighbor(direction);
    }

    fn select(&mut self, position: Position) {
        match self.game.select(position) {
            MoveOutcome::Placed { .. } => self.message = None,
            MoveOutcome::Rejected(rejection) => self.message = Some(rejection.to_string()),
        }
    }

    fn jump(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(()) => self.message = None,
            Err(e) => {
                warn!(error = %e, "Jump failed");
                self.message = Some(e.to_string());
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
